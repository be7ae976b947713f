//! Window state tracking on top of the platform event queue.
//!
//! The tracker is platform-agnostic: it consumes [`PlatformEvent`]s from any
//! [`EventSource`]. The SDL2 adapter lives behind the `sdl` feature.

mod events;
mod flags;
mod poll;
mod state;
mod window;

#[cfg(feature = "sdl")]
pub mod sdl;

pub use events::{PlatformEvent, WindowEventCode, WindowId};
pub use flags::WindowFlags;
pub use poll::EventSource;
pub use state::{Focus, Hover, Visibility, WindowChanges, WindowEventState};
pub use window::HostWindow;

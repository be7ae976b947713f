pub mod config;
mod error;
mod host_events;
mod sync;

pub use config::{PlatformConfig, TrackerConfig, VkConfig, WindowConfig, WindowMode};
pub use error::{CoreError, CoreResult};
pub use host_events::{WindowHostEvent, WindowRect};
pub use sync::shutdown::ShutdownToken;

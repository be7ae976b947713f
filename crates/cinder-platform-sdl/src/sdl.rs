//! SDL2 adapter: decodes `sdl2` events into [`PlatformEvent`]s.

use sdl2::event::{Event, WindowEvent};
use sdl2::{EventPump, EventSubsystem};

use cinder_core::{CoreError, CoreResult, WindowRect};

use crate::events::{PlatformEvent, WindowEventCode, WindowId};
use crate::poll::EventSource;

pub fn translate(event: &Event) -> PlatformEvent {
    match event {
        Event::Window { window_id, win_event, .. } => PlatformEvent::Window {
            window_id: *window_id,
            code: translate_window(win_event),
        },
        Event::MouseWheel { x, y, .. } => PlatformEvent::MouseWheel { x: *x, y: *y },
        Event::Quit { .. } => PlatformEvent::Quit,
        Event::User { window_id, .. } => PlatformEvent::User { window_id: *window_id },
        _ => PlatformEvent::Other,
    }
}

fn translate_window(event: &WindowEvent) -> WindowEventCode {
    match *event {
        WindowEvent::None => WindowEventCode::Created,
        WindowEvent::Shown => WindowEventCode::Shown,
        WindowEvent::Restored => WindowEventCode::Restored,
        WindowEvent::Hidden => WindowEventCode::Hidden,
        WindowEvent::Minimized => WindowEventCode::Minimized,
        WindowEvent::Moved(x, y) => WindowEventCode::Moved { x, y },
        WindowEvent::Resized(width, height) => WindowEventCode::Resized { width, height },
        WindowEvent::Enter => WindowEventCode::Enter,
        WindowEvent::Leave => WindowEventCode::Leave,
        WindowEvent::FocusGained => WindowEventCode::FocusGained,
        WindowEvent::FocusLost => WindowEventCode::FocusLost,
        WindowEvent::Close => WindowEventCode::Close,
        _ => WindowEventCode::Other,
    }
}

/// Borrowing [`EventSource`] over the SDL event pump.
pub struct SdlEventSource<'a> {
    pump: &'a mut EventPump,
}

impl<'a> SdlEventSource<'a> {
    #[inline]
    pub fn new(pump: &'a mut EventPump) -> Self {
        Self { pump }
    }
}

impl EventSource for SdlEventSource<'_> {
    #[inline]
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.pump.poll_event().map(|e| translate(&e))
    }
}

/// Queues the "window created" notification the tracker waits for.
pub fn push_window_created(events: &EventSubsystem, window_id: WindowId) -> CoreResult<()> {
    events
        .push_event(Event::Window {
            timestamp: 0,
            window_id,
            win_event: WindowEvent::None,
        })
        .map_err(CoreError::Platform)
}

/// Live position and size of an SDL window.
pub fn window_rect(window: &sdl2::video::Window) -> WindowRect {
    let (x, y) = window.position();
    let (width, height) = window.size();
    WindowRect { x, y, width, height }
}

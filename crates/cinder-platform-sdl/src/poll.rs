use std::collections::VecDeque;

use crate::events::PlatformEvent;
use crate::state::WindowEventState;

/// Non-blocking source of decoded platform notifications.
///
/// `poll_event` returns `None` once nothing is pending for the current tick.
pub trait EventSource {
    fn poll_event(&mut self) -> Option<PlatformEvent>;
}

impl EventSource for VecDeque<PlatformEvent> {
    #[inline]
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.pop_front()
    }
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    #[inline]
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        (**self).poll_event()
    }
}

impl WindowEventState {
    /// Drains every pending notification and folds it into the record.
    ///
    /// Returns `false` when a quit notification was seen. In that case the
    /// close bit is cleared on exit so the next run starts rearmed.
    pub fn poll_and_update<S: EventSource + ?Sized>(&mut self, source: &mut S) -> bool {
        let mut alive = true;
        self.set_wheel(0, 0);

        while let Some(event) = source.poll_event() {
            match event {
                PlatformEvent::Window { window_id, code } => {
                    if window_id != self.window_id() {
                        log::trace!("dropping {code:?} for foreign window {window_id}");
                        continue;
                    }
                    if self.close_requested() {
                        log::trace!("dropping {code:?}, window {window_id} is closing");
                        continue;
                    }
                    self.apply_window_event(code);
                }

                PlatformEvent::MouseWheel { x, y } => self.set_wheel(x, y),

                // Quit ends the run but leaves the per-window close bit alone.
                PlatformEvent::Quit => alive = false,

                // Generic user notifications carry window id 0.
                PlatformEvent::User { window_id } => {
                    if self.user_event_creates() && (window_id == 0 || window_id == self.window_id()) {
                        self.set_created();
                    }
                }

                PlatformEvent::Other => {}
            }
        }

        if !alive {
            self.rearm_close();
        }

        alive
    }
}

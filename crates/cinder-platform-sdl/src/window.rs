use cinder_core::{WindowHostEvent, WindowRect};

use crate::state::{Focus, Hover, Visibility, WindowEventState};

/// Consumer side of the tracker.
///
/// Turns the per-window record into host events once per tick and clears the
/// sticky bits it has handled. Geometry comes from the record when it is
/// tracked, otherwise from the `query_rect` callback (the live window).
#[derive(Debug, Clone)]
pub struct HostWindow {
    rect: WindowRect,
    keyboard_focus: bool,
    mouse_focus: bool,
    visibility: Visibility,
    close_reported: bool,
}

impl HostWindow {
    pub fn new(rect: WindowRect) -> Self {
        Self {
            rect,
            keyboard_focus: false,
            mouse_focus: false,
            visibility: Visibility::Unknown,
            close_reported: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    #[inline]
    pub fn keyboard_focus(&self) -> bool {
        self.keyboard_focus
    }

    #[inline]
    pub fn mouse_focus(&self) -> bool {
        self.mouse_focus
    }

    pub fn process<F>(&mut self, state: &mut WindowEventState, mut query_rect: F) -> Vec<WindowHostEvent>
    where
        F: FnMut() -> WindowRect,
    {
        let changes = state.take_changes();
        let geometry = state.geometry();
        let mut current = || geometry.unwrap_or_else(&mut query_rect);

        let mut out = Vec::new();
        let mut size_reported = false;

        if changes.created {
            log::debug!("window event: created");
            self.rect = current();
            // A freshly shown window owns keyboard focus, and we may already
            // have the mouse without ever seeing an enter notification.
            self.keyboard_focus = true;
            self.mouse_focus = true;
            out.push(WindowHostEvent::Shown(self.rect));
            size_reported = true;
        }

        if changes.rect_changed {
            log::debug!("window event: rect changed");
            let old = self.rect;
            self.rect = current();

            if (old.x, old.y) != (self.rect.x, self.rect.y) {
                out.push(WindowHostEvent::Moved { x: self.rect.x, y: self.rect.y });
            }
            if !old.same_size(&self.rect) {
                out.push(self.resized());
            }
            size_reported = true;
        }

        if changes.surface_changed && !size_reported {
            log::debug!("window event: surface changed");
            self.rect = current();
            out.push(self.resized());
            size_reported = true;
        }

        let visibility = state.visibility();
        if visibility != self.visibility {
            match visibility {
                Visibility::Shown => {
                    log::debug!("window event: shown");
                    if !size_reported {
                        out.push(self.resized());
                    }
                }
                Visibility::Hidden => {
                    log::debug!("window event: hidden");
                    out.push(WindowHostEvent::Resized { width: 0, height: 0 });
                }
                Visibility::Unknown => {}
            }
            self.visibility = visibility;
        }

        let focus = match state.focus() {
            Focus::Gained => Some(true),
            Focus::Lost => Some(false),
            Focus::Unknown => None,
        };
        if let Some(focus) = focus.filter(|f| *f != self.keyboard_focus) {
            log::debug!("window event: focus {}", if focus { "gained" } else { "lost" });
            self.keyboard_focus = focus;
            out.push(WindowHostEvent::Focused(focus));
        }

        let hover = match state.hover() {
            Hover::Entered => Some(true),
            Hover::Left => Some(false),
            Hover::Unknown => None,
        };
        if let Some(hover) = hover.filter(|h| *h != self.mouse_focus) {
            log::debug!("window event: {}", if hover { "enter" } else { "leave" });
            self.mouse_focus = hover;
            out.push(WindowHostEvent::Hovered(hover));
        }

        if state.close_requested() {
            if !self.close_reported {
                log::debug!("window event: close requested");
                self.close_reported = true;
                out.push(WindowHostEvent::CloseRequested);
            }
        } else {
            self.close_reported = false;
        }

        out
    }

    #[inline]
    fn resized(&self) -> WindowHostEvent {
        WindowHostEvent::Resized {
            width: self.rect.width,
            height: self.rect.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::WindowEventCode;

    const START: WindowRect = WindowRect { x: 0, y: 0, width: 640, height: 480 };

    fn tracked() -> WindowEventState {
        WindowEventState::new(1).with_geometry(START)
    }

    fn no_query() -> WindowRect {
        panic!("geometry is tracked, live query not expected")
    }

    #[test]
    fn created_assumes_focus_and_reports_rect() {
        let mut state = tracked();
        let mut host = HostWindow::new(WindowRect::default());
        state.apply_window_event(WindowEventCode::Created);

        let events = host.process(&mut state, no_query);

        assert_eq!(events, vec![WindowHostEvent::Shown(START)]);
        assert!(host.keyboard_focus());
        assert!(host.mouse_focus());
        assert!(!state.is_created());
    }

    #[test]
    fn default_config_reports_live_rect_after_created() {
        use crate::events::PlatformEvent;
        use cinder_core::TrackerConfig;
        use std::collections::VecDeque;

        let live = WindowRect { x: 100, y: 80, width: 1280, height: 720 };
        let mut state = WindowEventState::from_config(1, &TrackerConfig::default(), live);
        let mut host = HostWindow::new(live);

        let mut created: VecDeque<PlatformEvent> =
            [PlatformEvent::Window { window_id: 1, code: WindowEventCode::Created }].into_iter().collect();
        state.poll_and_update(&mut created);
        assert_eq!(host.process(&mut state, || live), vec![WindowHostEvent::Shown(live)]);

        let mut shown: VecDeque<PlatformEvent> =
            [PlatformEvent::Window { window_id: 1, code: WindowEventCode::Shown }].into_iter().collect();
        state.poll_and_update(&mut shown);
        assert_eq!(
            host.process(&mut state, || live),
            vec![WindowHostEvent::Resized { width: 1280, height: 720 }]
        );

        let mut moved: VecDeque<PlatformEvent> =
            [PlatformEvent::Window { window_id: 1, code: WindowEventCode::Moved { x: 5, y: 6 } }]
                .into_iter()
                .collect();
        state.poll_and_update(&mut moved);
        assert_eq!(host.process(&mut state, || live), vec![WindowHostEvent::Moved { x: 5, y: 6 }]);
        assert_eq!(host.rect(), WindowRect { x: 5, y: 6, width: 1280, height: 720 });
    }

    #[test]
    fn resize_reports_only_real_size_changes() {
        let mut state = tracked();
        let mut host = HostWindow::new(START);

        state.apply_window_event(WindowEventCode::Moved { x: 5, y: 6 });
        assert_eq!(
            host.process(&mut state, no_query),
            vec![WindowHostEvent::Moved { x: 5, y: 6 }]
        );

        state.apply_window_event(WindowEventCode::Resized { width: 800, height: 600 });
        assert_eq!(
            host.process(&mut state, no_query),
            vec![WindowHostEvent::Resized { width: 800, height: 600 }]
        );
        assert_eq!(host.rect(), WindowRect { x: 5, y: 6, width: 800, height: 600 });

        // Sticky bit was consumed.
        assert!(host.process(&mut state, no_query).is_empty());
    }

    #[test]
    fn untracked_geometry_queries_the_window() {
        let mut state = WindowEventState::new(1);
        let mut host = HostWindow::new(START);
        state.apply_window_event(WindowEventCode::Resized { width: 1, height: 1 });

        let mut queries = 0;
        let events = host.process(&mut state, || {
            queries += 1;
            WindowRect { x: 0, y: 0, width: 1024, height: 768 }
        });

        assert_eq!(queries, 1);
        assert_eq!(events, vec![WindowHostEvent::Resized { width: 1024, height: 768 }]);
    }

    #[test]
    fn hide_and_show_transitions() {
        let mut state = tracked();
        let mut host = HostWindow::new(START);

        state.apply_window_event(WindowEventCode::Minimized);
        assert_eq!(
            host.process(&mut state, no_query),
            vec![WindowHostEvent::Resized { width: 0, height: 0 }]
        );

        state.apply_window_event(WindowEventCode::Restored);
        assert_eq!(
            host.process(&mut state, no_query),
            vec![WindowHostEvent::Resized { width: 640, height: 480 }]
        );

        // Unchanged visibility does not repeat.
        assert!(host.process(&mut state, no_query).is_empty());
    }

    #[test]
    fn focus_and_hover_report_changes_once() {
        let mut state = tracked();
        let mut host = HostWindow::new(START);

        state.apply_window_event(WindowEventCode::FocusGained);
        state.apply_window_event(WindowEventCode::Enter);
        assert_eq!(
            host.process(&mut state, no_query),
            vec![WindowHostEvent::Focused(true), WindowHostEvent::Hovered(true)]
        );
        assert!(host.process(&mut state, no_query).is_empty());

        state.apply_window_event(WindowEventCode::FocusLost);
        assert_eq!(host.process(&mut state, no_query), vec![WindowHostEvent::Focused(false)]);
    }

    #[test]
    fn close_is_reported_until_rearmed() {
        use crate::events::PlatformEvent;
        use std::collections::VecDeque;

        let mut state = tracked();
        let mut host = HostWindow::new(START);

        state.apply_window_event(WindowEventCode::Close);
        assert_eq!(host.process(&mut state, no_query), vec![WindowHostEvent::CloseRequested]);
        assert!(host.process(&mut state, no_query).is_empty());

        let mut quit: VecDeque<PlatformEvent> = [PlatformEvent::Quit].into_iter().collect();
        state.poll_and_update(&mut quit);
        assert!(host.process(&mut state, no_query).is_empty());

        state.apply_window_event(WindowEventCode::Close);
        assert_eq!(host.process(&mut state, no_query), vec![WindowHostEvent::CloseRequested]);
    }

    #[test]
    fn surface_change_forces_resize() {
        let mut state = tracked();
        let mut host = HostWindow::new(START);
        host.visibility = Visibility::Shown;

        state.apply_window_event(WindowEventCode::PixelSizeChanged { width: 1280, height: 960 });
        assert_eq!(
            host.process(&mut state, no_query),
            vec![WindowHostEvent::Resized { width: 640, height: 480 }]
        );
    }
}

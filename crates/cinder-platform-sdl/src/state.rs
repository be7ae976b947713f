use cinder_core::{TrackerConfig, WindowRect};

use crate::events::{WindowEventCode, WindowId};
use crate::flags::WindowFlags;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Unknown,
    Shown,
    Hidden,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Hover {
    #[default]
    Unknown,
    Entered,
    Left,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Unknown,
    Gained,
    Lost,
}

/// Sticky bits handed to the consumer by [`WindowEventState::take_changes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowChanges {
    pub created: bool,
    pub rect_changed: bool,
    pub surface_changed: bool,
}

impl WindowChanges {
    #[inline]
    pub fn any(&self) -> bool {
        self.created || self.rect_changed || self.surface_changed
    }
}

/// Per-window state record, mutated by polling once per tick.
///
/// Single writer: the record lives on the event thread that owns the window.
#[derive(Debug, Clone)]
pub struct WindowEventState {
    window_id: WindowId,

    visibility: Visibility,
    hover: Hover,
    focus: Focus,

    created: bool,
    rect_changed: bool,
    surface_changed: bool,
    close_requested: bool,

    /// `None` when geometry tracking is disabled.
    geometry: Option<WindowRect>,

    wheel_x: i32,
    wheel_y: i32,

    user_event_creates: bool,
}

impl WindowEventState {
    /// Bare tracker: no geometry, user notifications ignored.
    pub fn new(window_id: WindowId) -> Self {
        Self {
            window_id,
            visibility: Visibility::Unknown,
            hover: Hover::Unknown,
            focus: Focus::Unknown,
            created: false,
            rect_changed: false,
            surface_changed: false,
            close_requested: false,
            geometry: None,
            wheel_x: 0,
            wheel_y: 0,
            user_event_creates: false,
        }
    }

    /// `initial` is the live window rect; it seeds tracked geometry.
    pub fn from_config(window_id: WindowId, cfg: &TrackerConfig, initial: WindowRect) -> Self {
        let mut state = Self::new(window_id).with_user_event_creates(cfg.user_event_creates);
        if cfg.track_geometry {
            state = state.with_geometry(initial);
        }
        state
    }

    #[inline]
    pub fn with_geometry(mut self, initial: WindowRect) -> Self {
        self.geometry = Some(initial);
        self
    }

    #[inline]
    pub fn with_user_event_creates(mut self, enabled: bool) -> Self {
        self.user_event_creates = enabled;
        self
    }

    #[inline]
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn hover(&self) -> Hover {
        self.hover
    }

    #[inline]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[inline]
    pub fn is_created(&self) -> bool {
        self.created
    }

    #[inline]
    pub fn rect_changed(&self) -> bool {
        self.rect_changed
    }

    #[inline]
    pub fn surface_changed(&self) -> bool {
        self.surface_changed
    }

    #[inline]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    #[inline]
    pub fn geometry(&self) -> Option<WindowRect> {
        self.geometry
    }

    /// Scroll deltas of the last notification in the most recent poll.
    /// A poll without scroll notifications leaves them at zero.
    #[inline]
    pub fn wheel(&self) -> (i32, i32) {
        (self.wheel_x, self.wheel_y)
    }

    #[inline]
    pub(crate) fn user_event_creates(&self) -> bool {
        self.user_event_creates
    }

    #[inline]
    pub(crate) fn set_created(&mut self) {
        self.created = true;
    }

    #[inline]
    pub(crate) fn set_wheel(&mut self, x: i32, y: i32) {
        self.wheel_x = x;
        self.wheel_y = y;
    }

    #[inline]
    pub(crate) fn rearm_close(&mut self) {
        self.close_requested = false;
    }

    /// Returns the scroll deltas and zeroes them.
    #[inline]
    pub fn take_wheel(&mut self) -> (i32, i32) {
        let wheel = self.wheel();
        self.set_wheel(0, 0);
        wheel
    }

    /// Returns the sticky bits and clears them. Consumer side reset path.
    pub fn take_changes(&mut self) -> WindowChanges {
        let changes = WindowChanges {
            created: self.created,
            rect_changed: self.rect_changed,
            surface_changed: self.surface_changed,
        };
        self.created = false;
        self.rect_changed = false;
        self.surface_changed = false;
        changes
    }

    /// Applies one window-subtype notification.
    ///
    /// Caller has already matched the window id and checked that close is not set.
    /// Re-applying the same code leaves the record unchanged.
    pub fn apply_window_event(&mut self, code: WindowEventCode) {
        match code {
            WindowEventCode::Created => self.created = true,

            WindowEventCode::Shown | WindowEventCode::Restored => {
                self.visibility = Visibility::Shown;
            }
            WindowEventCode::PixelSizeChanged { .. } => {
                self.visibility = Visibility::Shown;
                self.surface_changed = true;
            }
            WindowEventCode::Hidden | WindowEventCode::Minimized => {
                self.visibility = Visibility::Hidden;
            }

            WindowEventCode::Moved { x, y } => {
                self.rect_changed = true;
                if let Some(rect) = self.geometry.as_mut() {
                    rect.x = x;
                    rect.y = y;
                }
            }
            WindowEventCode::Resized { width, height } => {
                self.rect_changed = true;
                if let Some(rect) = self.geometry.as_mut() {
                    rect.width = u32::try_from(width).unwrap_or(0);
                    rect.height = u32::try_from(height).unwrap_or(0);
                }
            }

            WindowEventCode::Enter => self.hover = Hover::Entered,
            WindowEventCode::Leave => self.hover = Hover::Left,

            WindowEventCode::FocusGained => self.focus = Focus::Gained,
            WindowEventCode::FocusLost => self.focus = Focus::Lost,

            WindowEventCode::Close => self.close_requested = true,

            WindowEventCode::Other => {}
        }
    }

    /// Legacy bitmask view of the record.
    pub fn flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::empty();

        flags.set(WindowFlags::CREATED, self.created);
        flags.set(WindowFlags::RECT_CHANGED, self.rect_changed);
        flags.set(WindowFlags::SURFACE_CHANGED, self.surface_changed);
        flags.set(WindowFlags::CLOSE, self.close_requested);

        match self.visibility {
            Visibility::Shown => flags |= WindowFlags::SHOWN,
            Visibility::Hidden => flags |= WindowFlags::HIDDEN,
            Visibility::Unknown => {}
        }
        match self.hover {
            Hover::Entered => flags |= WindowFlags::ENTER,
            Hover::Left => flags |= WindowFlags::LEAVE,
            Hover::Unknown => {}
        }
        match self.focus {
            Focus::Gained => flags |= WindowFlags::FOCUS_GAINED,
            Focus::Lost => flags |= WindowFlags::FOCUS_LOST,
            Focus::Unknown => {}
        }

        flags
    }
}

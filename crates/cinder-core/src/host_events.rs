/// Window position and size in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowRect {
    #[inline]
    pub fn same_size(&self, other: &WindowRect) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// Host window lifecycle + size/focus events.
/// Platform crates emit these once per tick, renderers and the app loop consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHostEvent {
    Shown(WindowRect),
    Moved { x: i32, y: i32 },
    Resized { width: u32, height: u32 },
    Focused(bool),
    Hovered(bool),
    CloseRequested,
}

/// Platform window identifier, as handed out by the windowing library.
pub type WindowId = u32;

/// Window-subtype notification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEventCode {
    /// Pushed by the platform right after the window was created.
    Created,
    Shown,
    Restored,
    /// Drawable size changed (surface-tracking platforms only).
    PixelSizeChanged { width: i32, height: i32 },
    Hidden,
    Minimized,
    Moved { x: i32, y: i32 },
    Resized { width: i32, height: i32 },
    Enter,
    Leave,
    FocusGained,
    FocusLost,
    Close,
    Other,
}

/// Decoded platform notification.
///
/// Only the shapes the tracker reacts to are distinguished; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Window {
        window_id: WindowId,
        code: WindowEventCode,
    },
    MouseWheel {
        x: i32,
        y: i32,
    },
    /// Application-wide quit request, distinct from a single window's close.
    Quit,
    /// User-defined notification addressed to a window.
    User {
        window_id: WindowId,
    },
    Other,
}

use bitflags::bitflags;

bitflags! {
    /// Bit layout of the window state word shared with native consumers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const CREATED         = 1 << 0;
        const HIDDEN          = 1 << 1;
        const RECT_CHANGED    = 1 << 2;
        const SURFACE_CHANGED = 1 << 3;
        const ENTER           = 1 << 4;
        const LEAVE           = 1 << 5;
        const FOCUS_GAINED    = 1 << 6;
        const FOCUS_LOST      = 1 << 7;
        const CLOSE           = 1 << 8;
        const SHOWN           = 1 << 9;
    }
}

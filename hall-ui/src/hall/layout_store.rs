use crate::hall::prefs::LayoutPrefs;

pub const DEFAULT_LEFT_WIDTH: i32 = 280;
pub const DEFAULT_RIGHT_WIDTH: i32 = 420;
pub const MIN_LEFT_WIDTH: i32 = 220;
pub const MAX_LEFT_WIDTH: i32 = 420;
pub const MIN_RIGHT_WIDTH: i32 = 320;
pub const MAX_RIGHT_WIDTH: i32 = 560;
pub const COLLAPSED_LEFT_WIDTH: i32 = 64;
pub const RESIZE_HANDLE_WIDTH: i32 = 8;
/// Viewports narrower than this use the drawer layout.
pub const MOBILE_BREAKPOINT_PX: u32 = 1280;

pub fn clamp_left_width(width: i32) -> i32 {
    width.clamp(MIN_LEFT_WIDTH, MAX_LEFT_WIDTH)
}

pub fn clamp_right_width(width: i32) -> i32 {
    width.clamp(MIN_RIGHT_WIDTH, MAX_RIGHT_WIDTH)
}

pub fn is_mobile_width(viewport_width: u32) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

/// Pane geometry and visibility of the three-pane shell.
///
/// Widths are clamped on every write. `is_mobile` and the two drawer flags
/// belong to the session and never reach [`LayoutPrefs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStore {
    left_width: i32,
    right_width: i32,
    left_collapsed: bool,
    right_open: bool,
    is_mobile: bool,
    left_drawer_open: bool,
    right_drawer_open: bool,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self {
            left_width: DEFAULT_LEFT_WIDTH,
            right_width: DEFAULT_RIGHT_WIDTH,
            left_collapsed: false,
            right_open: false,
            is_mobile: false,
            left_drawer_open: false,
            right_drawer_open: false,
        }
    }
}

impl LayoutStore {
    pub fn from_prefs(prefs: LayoutPrefs) -> Self {
        let mut store = Self::default();
        store.set_left_width(prefs.left_width);
        store.set_right_width(prefs.right_width);
        store.left_collapsed = prefs.left_collapsed;
        store.right_open = prefs.right_open;
        store
    }

    pub fn prefs(&self) -> LayoutPrefs {
        LayoutPrefs {
            left_width: self.left_width,
            right_width: self.right_width,
            left_collapsed: self.left_collapsed,
            right_open: self.right_open,
        }
    }

    pub fn left_width(&self) -> i32 {
        self.left_width
    }

    pub fn right_width(&self) -> i32 {
        self.right_width
    }

    pub fn left_collapsed(&self) -> bool {
        self.left_collapsed
    }

    pub fn right_open(&self) -> bool {
        self.right_open
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn left_drawer_open(&self) -> bool {
        self.left_drawer_open
    }

    pub fn right_drawer_open(&self) -> bool {
        self.right_drawer_open
    }

    pub fn set_left_width(&mut self, width: i32) {
        self.left_width = clamp_left_width(width);
    }

    pub fn set_right_width(&mut self, width: i32) {
        self.right_width = clamp_right_width(width);
    }

    /// Apply a drag delta from the handle right of the left pane.
    /// Dragging right widens the pane.
    pub fn resize_left(&mut self, delta: i32) {
        self.set_left_width(self.left_width + delta);
    }

    /// Apply a drag delta from the handle left of the right pane.
    /// Dragging right shrinks the pane.
    pub fn resize_right(&mut self, delta: i32) {
        self.set_right_width(self.right_width - delta);
    }

    pub fn set_left_collapsed(&mut self, collapsed: bool) {
        self.left_collapsed = collapsed;
    }

    pub fn set_right_open(&mut self, open: bool) {
        self.right_open = open;
    }

    /// Drawer flags are left as they are when the breakpoint is crossed.
    pub fn set_is_mobile(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
    }

    pub fn set_left_drawer_open(&mut self, open: bool) {
        self.left_drawer_open = open;
    }

    pub fn set_right_drawer_open(&mut self, open: bool) {
        self.right_drawer_open = open;
    }

    pub fn toggle_left_pane(&mut self) {
        if self.is_mobile {
            self.left_drawer_open = !self.left_drawer_open;
        } else {
            self.left_collapsed = !self.left_collapsed;
        }
    }

    pub fn toggle_right_pane(&mut self) {
        if self.is_mobile {
            self.right_drawer_open = !self.right_drawer_open;
        } else {
            self.right_open = !self.right_open;
        }
    }

    /// Make the side panel visible in whichever form the viewport uses.
    pub fn reveal_right_pane(&mut self) {
        if self.is_mobile {
            self.right_drawer_open = true;
        } else {
            self.right_open = true;
        }
    }

    pub fn reset_widths(&mut self) {
        self.left_width = DEFAULT_LEFT_WIDTH;
        self.right_width = DEFAULT_RIGHT_WIDTH;
    }

    pub fn effective_left_width(&self) -> i32 {
        if self.left_collapsed {
            COLLAPSED_LEFT_WIDTH
        } else {
            self.left_width
        }
    }

    /// Horizontal space taken by the right pane and its handle.
    pub fn right_footprint(&self) -> i32 {
        if self.right_open {
            self.right_width + RESIZE_HANDLE_WIDTH
        } else {
            0
        }
    }
}

pub mod chat_header;
pub mod left_nav;
pub mod mobile;
pub mod resize_handle;

pub use chat_header::ChatHeader;
pub use left_nav::{LeftNav, NavRail};
pub use mobile::{Drawer, DrawerSide, MobileHeader, MobileSidecar};
pub use resize_handle::ResizeHandle;

//! Hall - the three-pane workspace.
//!
//! Owns the shared stores ([`LayoutStore`], [`SidecarStore`], the
//! conversation), the browser effects that feed them, and the shell that
//! lays out navigation, chat and Sidecar for desktop and mobile viewports.

pub mod actions;
pub mod components;
pub mod conversation;
pub mod effects;
pub mod hotkeys;
pub mod layout_store;
pub mod prefs;
pub mod resize;
pub mod shell;
pub mod sidecar_store;

pub use conversation::Conversation;
pub use layout_store::LayoutStore;
pub use shell::HallShell;
pub use sidecar_store::SidecarStore;

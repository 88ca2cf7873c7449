pub mod components;
pub mod config;
pub mod hall;
pub mod interop;
pub mod mock_data;
pub mod sidecar;
pub mod stream;

pub use config::{hall_config, HallConfig};
pub use hall::{Conversation, HallShell, LayoutStore, SidecarStore};
pub use sidecar::{lookup, plugin_for, PluginId, PluginInfo, SidecarPane, REGISTRY};
pub use stream::{drive_turn, response_source, ResponseSource, StreamError};

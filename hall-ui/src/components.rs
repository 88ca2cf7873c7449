//! Chat surface: transcript, composers and the shared stylesheet.

pub mod composer;
pub mod message_list;
pub mod quick_actions;
pub mod styles;
pub mod voice;

pub use composer::Composer;
pub use message_list::{MessageBubble, MessageList};
pub use quick_actions::{QuickAction, QuickActions, COMPOSER_ACTIONS, FOLLOW_UP_ACTIONS};
pub use styles::HALL_STYLES;
pub use voice::VoiceComposer;

use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use hall_types::{AgentConfig, Attachment, Citation, SidecarPayload, SidecarType};

use crate::hall::conversation::Conversation;
use crate::hall::{LayoutStore, SidecarStore};
use crate::stream::{drive_turn, ResponseSource};

pub const CITATIONS_TITLE: &str = "Nguồn trích dẫn";

pub fn citations_payload(message_id: &str, citations: &[Citation]) -> SidecarPayload {
    let data = serde_json::to_value(citations).unwrap_or_default();
    SidecarPayload::new(SidecarType::Citations, data).with_meta(CITATIONS_TITLE, message_id)
}

pub fn attachment_payload(message_id: &str, attachment: &Attachment) -> SidecarPayload {
    let kind = attachment.sidecar_type();
    let title = attachment
        .title()
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("{kind} attachment"));
    let data = serde_json::to_value(attachment).unwrap_or_default();
    SidecarPayload::new(kind, data).with_meta(title, message_id)
}

/// Push a payload and make the side panel visible.
pub fn open_payload(sidecar: &mut SidecarStore, layout: &mut LayoutStore, payload: SidecarPayload) {
    sidecar.push(payload);
    layout.reveal_right_pane();
}

/// Start a turn and stream the reply into `conversation` on a task owned by
/// the calling scope. Blank prompts and prompts sent mid-stream are ignored.
pub fn send_message(
    mut conversation: Signal<Conversation>,
    source: Rc<dyn ResponseSource>,
    text: String,
    agent: AgentConfig,
) {
    let text = text.trim().to_string();
    if text.is_empty() || conversation.read().is_streaming() {
        return;
    }

    let reply_id = conversation.write().begin_turn(&text, Utc::now());
    let events = source.open(&text, &agent);

    spawn(async move {
        let result = drive_turn(events, |update| conversation.write().apply(&reply_id, update)).await;
        if let Err(e) = result {
            warn!("Streaming error: {}", e);
        }
    });
}

use dioxus::prelude::*;
use hall_types::{Attachment, Message, MessageMetrics, Role};

use super::quick_actions::{QuickActions, FOLLOW_UP_ACTIONS};
use crate::hall::actions::{attachment_payload, citations_payload, open_payload};
use crate::hall::{Conversation, LayoutStore, SidecarStore};
use crate::interop::{copy_text_to_clipboard, scroll_to_bottom};

const SCROLL_ID: &str = "hall-messages";

fn attachment_icon(attachment: &Attachment) -> &'static str {
    match attachment {
        Attachment::Chart(_) => "📊",
        Attachment::Doc(_) | Attachment::Table(_) => "📄",
    }
}

fn attachment_button_label(attachment: &Attachment) -> String {
    attachment
        .title()
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("Xem {}", attachment.sidecar_type()))
}

/// Scrolling transcript of the open chat.
#[component]
pub fn MessageList(on_follow_up: Callback<String>) -> Element {
    let conversation = use_context::<Signal<Conversation>>();

    // Any change to the transcript (new message or chunk) pins the view to the end.
    use_effect(move || {
        let _ = conversation.read();
        scroll_to_bottom(SCROLL_ID);
    });

    let messages = conversation.read().messages().to_vec();

    rsx! {
        div {
            id: SCROLL_ID,
            class: "message-scroll",
            div {
                class: "message-list",
                for message in messages {
                    MessageBubble {
                        key: "{message.id}",
                        message: message.clone(),
                        on_follow_up,
                    }
                }
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: Message, on_follow_up: Callback<String>) -> Element {
    let mut sidecar = use_context::<Signal<SidecarStore>>();
    let mut layout = use_context::<Signal<LayoutStore>>();

    let is_user = message.role == Role::User;
    let show_follow_ups = message.role == Role::Assistant && !message.is_streaming;
    let citation_count = message.citations.len();

    let open_citations = {
        let message = message.clone();
        move |_| {
            let payload = citations_payload(&message.id, &message.citations);
            open_payload(&mut sidecar.write(), &mut layout.write(), payload);
        }
    };

    let copy_text = message.text.clone();

    rsx! {
        div {
            class: if is_user { "message-row user-row" } else { "message-row assistant-row" },
            div {
                class: if is_user { "message-bubble user-bubble" } else { "message-bubble assistant-bubble" },
                if message.is_streaming {
                    div {
                        class: "streaming-indicator muted small",
                        span { class: "live-dot" }
                        "Đang phản hồi..."
                    }
                }
                if !message.text.is_empty() {
                    div {
                        class: "message-text",
                        for (index, line) in message.text.split('\n').enumerate() {
                            p { key: "{index}", "{line}" }
                        }
                    }
                }
                if citation_count > 0 {
                    div {
                        class: "message-extras",
                        button {
                            class: "btn btn-outline btn-small",
                            onclick: open_citations,
                            "📄 Xem {citation_count} nguồn trích dẫn"
                        }
                    }
                }
                if !message.attachments.is_empty() {
                    div {
                        class: "message-extras",
                        for (index, attachment) in message.attachments.iter().enumerate() {
                            AttachmentButton {
                                key: "{index}",
                                message_id: message.id.clone(),
                                attachment: attachment.clone(),
                            }
                        }
                    }
                }
            }
            div {
                class: "message-actions",
                button {
                    class: "icon-btn",
                    title: "Sao chép",
                    onclick: move |_| copy_text_to_clipboard(&copy_text),
                    "⧉"
                }
            }
            if let Some(metrics) = message.metrics.clone() {
                MetricsLine { metrics }
            }
            if show_follow_ups {
                div {
                    class: "message-follow-ups",
                    QuickActions {
                        caption: "Thao tác:",
                        actions: &FOLLOW_UP_ACTIONS[..],
                        on_action: on_follow_up,
                    }
                }
            }
        }
    }
}

#[component]
fn AttachmentButton(message_id: String, attachment: Attachment) -> Element {
    let mut sidecar = use_context::<Signal<SidecarStore>>();
    let mut layout = use_context::<Signal<LayoutStore>>();
    let icon = attachment_icon(&attachment);
    let label = attachment_button_label(&attachment);

    rsx! {
        button {
            class: "btn btn-outline btn-small",
            onclick: move |_| {
                let payload = attachment_payload(&message_id, &attachment);
                open_payload(&mut sidecar.write(), &mut layout.write(), payload);
            },
            "{icon} {label}"
        }
    }
}

#[component]
fn MetricsLine(metrics: MessageMetrics) -> Element {
    rsx! {
        div {
            class: "message-metrics muted small",
            if let Some(latency) = metrics.latency_ms {
                span { "🕒 {latency}ms" }
            }
            if let Some(model) = metrics.model.clone() {
                span { class: "badge badge-secondary", "{model}" }
            }
            if let Some(verifier) = metrics.verifier {
                span { class: "badge badge-outline", "Độ tin cậy: {verifier}%" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::{daily_practice_attachments, mind_levels_chart};

    #[test]
    fn attachment_labels_prefer_titles() {
        assert_eq!(
            attachment_button_label(&mind_levels_chart()),
            "Các tầng tâm thức trong Phật học"
        );
    }

    #[test]
    fn untitled_attachment_label_names_the_type() {
        let mut table = daily_practice_attachments().remove(1);
        if let Attachment::Table(inner) = &mut table {
            inner.title = None;
        }
        assert_eq!(attachment_button_label(&table), "Xem table");
        assert_eq!(attachment_icon(&table), "📄");
        assert_eq!(attachment_icon(&mind_levels_chart()), "📊");
    }
}

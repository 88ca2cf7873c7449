use chrono::{DateTime, Utc};
use hall_types::{Attachment, Citation, Message, MessageMetrics, Role};

pub const FAILURE_TEXT: &str = "Xin lỗi, có lỗi xảy ra khi xử lý câu hỏi của bạn.";

/// Sources and metrics attached to an assistant message when its reply ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    pub citations: Vec<Citation>,
    pub attachments: Vec<Attachment>,
    pub metrics: Option<MessageMetrics>,
}

/// One step of a streamed reply, as applied to the conversation.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnUpdate {
    Chunk(String),
    Complete(Enrichment),
    Fail,
}

/// Messages of the open chat plus the "a reply is streaming" flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
    is_streaming: bool,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            is_streaming: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_streaming(&self) -> bool {
        self.is_streaming
    }

    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Append the user's message and an empty streaming assistant reply.
    /// Returns the reply's id.
    pub fn begin_turn(&mut self, text: &str, now: DateTime<Utc>) -> String {
        self.messages.push(Message::new(Role::User, text, now));

        let mut reply = Message::new(Role::Assistant, "", now);
        reply.is_streaming = true;
        let id = reply.id.clone();
        self.messages.push(reply);

        self.is_streaming = true;
        id
    }

    pub fn apply(&mut self, id: &str, update: TurnUpdate) {
        match update {
            TurnUpdate::Chunk(text) => self.append_chunk(id, &text),
            TurnUpdate::Complete(enrichment) => self.complete_turn(id, enrichment),
            TurnUpdate::Fail => self.fail_turn(id),
        }
    }

    pub fn append_chunk(&mut self, id: &str, text: &str) {
        if let Some(message) = self.message_mut(id) {
            message.text.push_str(text);
        }
    }

    pub fn complete_turn(&mut self, id: &str, enrichment: Enrichment) {
        if let Some(message) = self.message_mut(id) {
            message.is_streaming = false;
            if !enrichment.citations.is_empty() {
                message.citations = enrichment.citations;
            }
            if !enrichment.attachments.is_empty() {
                message.attachments = enrichment.attachments;
            }
            if enrichment.metrics.is_some() {
                message.metrics = enrichment.metrics;
            }
        }
        self.is_streaming = false;
    }

    pub fn fail_turn(&mut self, id: &str) {
        if let Some(message) = self.message_mut(id) {
            message.text = FAILURE_TEXT.to_string();
            message.is_streaming = false;
        }
        self.is_streaming = false;
    }

    fn message_mut(&mut self, id: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn begin_turn_appends_user_and_placeholder() {
        let mut conversation = Conversation::default();
        let id = conversation.begin_turn("Tâm thức là gì?", now());

        assert!(conversation.is_streaming());
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[0].role, Role::User);
        assert_eq!(conversation.messages()[0].text, "Tâm thức là gì?");

        let reply = conversation.message(&id).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.text.is_empty());
        assert!(reply.is_streaming);
    }

    #[test]
    fn chunks_append_in_order() {
        let mut conversation = Conversation::default();
        let id = conversation.begin_turn("q", now());
        conversation.apply(&id, TurnUpdate::Chunk("Theo lời dạy ".into()));
        conversation.apply(&id, TurnUpdate::Chunk("của các bậc Tổ sư".into()));

        assert_eq!(
            conversation.message(&id).unwrap().text,
            "Theo lời dạy của các bậc Tổ sư"
        );
    }

    #[test]
    fn complete_attaches_enrichment_and_clears_flags() {
        let mut conversation = Conversation::default();
        let id = conversation.begin_turn("q", now());
        conversation.append_chunk(&id, "answer");
        conversation.complete_turn(
            &id,
            Enrichment {
                metrics: Some(MessageMetrics {
                    latency_ms: Some(1200),
                    model: Some("gpt-4o-mini".into()),
                    verifier: Some(95),
                }),
                ..Enrichment::default()
            },
        );

        let reply = conversation.message(&id).unwrap();
        assert!(!reply.is_streaming);
        assert!(!conversation.is_streaming());
        assert_eq!(reply.text, "answer");
        assert_eq!(reply.metrics.as_ref().and_then(|m| m.verifier), Some(95));
        assert!(reply.citations.is_empty());
    }

    #[test]
    fn fail_replaces_text() {
        let mut conversation = Conversation::default();
        let id = conversation.begin_turn("q", now());
        conversation.append_chunk(&id, "partial");
        conversation.apply(&id, TurnUpdate::Fail);

        let reply = conversation.message(&id).unwrap();
        assert_eq!(reply.text, FAILURE_TEXT);
        assert!(!reply.is_streaming);
        assert!(!conversation.is_streaming());
    }

    #[test]
    fn unknown_id_still_clears_streaming_flag() {
        let mut conversation = Conversation::default();
        conversation.begin_turn("q", now());
        conversation.fail_turn("missing");
        assert!(!conversation.is_streaming());
    }
}

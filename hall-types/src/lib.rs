//! Shared types for the dharma hall
//!
//! These types are used by both:
//! - the Dioxus UI (WASM)
//! - any streaming backend that feeds it (exported to TypeScript via ts-rs)
//!
//! Serializable with serde; field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Sidecar Payloads
// ============================================================================

/// Content tag of a side-panel payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum SidecarType {
    Citations,
    Doc,
    Table,
    Chart,
    Audio,
    Map,
    Compare,
    Json,
}

impl SidecarType {
    pub const ALL: [SidecarType; 8] = [
        SidecarType::Citations,
        SidecarType::Doc,
        SidecarType::Table,
        SidecarType::Chart,
        SidecarType::Audio,
        SidecarType::Map,
        SidecarType::Compare,
        SidecarType::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SidecarType::Citations => "citations",
            SidecarType::Doc => "doc",
            SidecarType::Table => "table",
            SidecarType::Chart => "chart",
            SidecarType::Audio => "audio",
            SidecarType::Map => "map",
            SidecarType::Compare => "compare",
            SidecarType::Json => "json",
        }
    }
}

impl std::fmt::Display for SidecarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct PayloadMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// One unit of content routed into the side panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct SidecarPayload {
    #[serde(rename = "type")]
    pub kind: SidecarType,
    #[ts(type = "unknown")]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PayloadMeta>,
}

impl SidecarPayload {
    pub fn new(kind: SidecarType, data: serde_json::Value) -> Self {
        Self {
            kind,
            data,
            meta: None,
        }
    }

    pub fn with_meta(mut self, title: impl Into<String>, message_id: impl Into<String>) -> Self {
        self.meta = Some(PayloadMeta {
            title: Some(title.into()),
            message_id: Some(message_id.into()),
        });
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.title.as_deref())
    }

    pub fn message_id(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.message_id.as_deref())
    }

    /// Deduplication key: two payloads with the same identity occupy one tab.
    pub fn identity(&self) -> (SidecarType, Option<&str>) {
        (self.kind, self.message_id())
    }

    /// Tab label: the meta title, else the type tag.
    pub fn label(&self) -> String {
        self.title()
            .map(ToString::to_string)
            .unwrap_or_else(|| self.kind.to_string())
    }
}

// ============================================================================
// Citations & Attachments
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct Citation {
    pub doc_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Timestamp into an audio/video source, e.g. "00:15:30"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum ChartKind {
    Line,
    #[default]
    Bar,
    Pie,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct AttachmentChart {
    pub data: Vec<ChartPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartKind>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum DocKind {
    Md,
    Pdf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct AttachmentDoc {
    pub kind: DocKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct AttachmentTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Attachment carried by an assistant message, tagged by `type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum Attachment {
    Chart(AttachmentChart),
    Doc(AttachmentDoc),
    Table(AttachmentTable),
}

impl Attachment {
    pub fn sidecar_type(&self) -> SidecarType {
        match self {
            Attachment::Chart(_) => SidecarType::Chart,
            Attachment::Doc(_) => SidecarType::Doc,
            Attachment::Table(_) => SidecarType::Table,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Attachment::Chart(chart) => chart.title.as_deref(),
            Attachment::Doc(doc) => doc.title.as_deref(),
            Attachment::Table(table) => table.title.as_deref(),
        }
    }
}

// ============================================================================
// Chat Types
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum Role {
    User,
    Assistant,
    Tool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct MessageMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Verifier confidence in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifier: Option<u8>,
}

/// Chat message for UI display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct Message {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MessageMetrics>,
    #[serde(default)]
    pub is_streaming: bool,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_message_id(role),
            role,
            text: text.into(),
            created_at,
            citations: Vec::new(),
            attachments: Vec::new(),
            metrics: None,
            is_streaming: false,
        }
    }
}

pub fn new_message_id(role: Role) -> String {
    let prefix = match role {
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    };
    format!("{prefix}_{}", uuid::Uuid::new_v4().simple())
}

// ============================================================================
// Agent Configuration
// ============================================================================

/// Retrieval scope for the agent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum Scope {
    #[default]
    #[serde(rename = "corpus")]
    Corpus,
    #[serde(rename = "web-l1")]
    WebL1,
    #[serde(rename = "web-l2")]
    WebL2,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Corpus, Scope::WebL1, Scope::WebL2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Corpus => "corpus",
            Scope::WebL1 => "web-l1",
            Scope::WebL2 => "web-l2",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scope| scope.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum KnowledgeLevel {
    Beginner,
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl KnowledgeLevel {
    pub const ALL: [KnowledgeLevel; 4] = [
        KnowledgeLevel::Beginner,
        KnowledgeLevel::Basic,
        KnowledgeLevel::Intermediate,
        KnowledgeLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeLevel::Beginner => "beginner",
            KnowledgeLevel::Basic => "basic",
            KnowledgeLevel::Intermediate => "intermediate",
            KnowledgeLevel::Advanced => "advanced",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct AgentConfig {
    pub id: String,
    pub name: String,
    pub domains: Vec<String>,
    pub knowledge_ids: Vec<String>,
    pub temperature: f32,
    pub scope: Scope,
    pub citations: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_level: Option<KnowledgeLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct Chat {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub messages: Vec<Message>,
    pub agent: AgentConfig,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub chat_ids: Vec<String>,
}

// ============================================================================
// Response Stream Protocol
// ============================================================================

/// Wire event of a streamed assistant reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
#[ts(export, export_to = "../../hall-ui/src/types/generated.ts")]
pub enum StreamEvent {
    /// Text appended to the growing assistant message
    Chunk { text: String },

    /// Reply finished; sources and metrics attach to the message
    Done {
        #[serde(default)]
        citations: Vec<Citation>,
        #[serde(default)]
        attachments: Vec<Attachment>,
        #[serde(default)]
        metrics: Option<MessageMetrics>,
    },

    /// Producer failed; the turn is aborted
    Error { message: String },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_format() {
        let payload = SidecarPayload::new(SidecarType::Citations, json!([]))
            .with_meta("Nguồn trích dẫn", "m1");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "citations");
        assert_eq!(value["meta"]["messageId"], "m1");
        assert_eq!(value["meta"]["title"], "Nguồn trích dẫn");
    }

    #[test]
    fn test_payload_identity_ignores_title() {
        let a = SidecarPayload::new(SidecarType::Doc, json!({})).with_meta("A", "m1");
        let b = SidecarPayload::new(SidecarType::Doc, json!({"x": 1})).with_meta("B", "m1");
        let c = SidecarPayload::new(SidecarType::Chart, json!({})).with_meta("A", "m1");

        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), c.identity());
    }

    #[test]
    fn test_payload_without_meta() {
        let payload: SidecarPayload =
            serde_json::from_value(json!({"type": "map", "data": {"lat": 1.0}})).unwrap();
        assert_eq!(payload.kind, SidecarType::Map);
        assert_eq!(payload.identity(), (SidecarType::Map, None));
        assert_eq!(payload.label(), "map");
    }

    #[test]
    fn test_attachment_tagging() {
        let raw = json!({
            "type": "table",
            "headers": ["Pháp môn", "Thời gian"],
            "rows": [["Tọa thiền", "30-60 phút"]],
            "title": "Các pháp môn"
        });
        let attachment: Attachment = serde_json::from_value(raw).unwrap();
        assert_eq!(attachment.sidecar_type(), SidecarType::Table);
        assert_eq!(attachment.title(), Some("Các pháp môn"));
    }

    #[test]
    fn test_scope_serialization() {
        assert_eq!(serde_json::to_string(&Scope::WebL1).unwrap(), "\"web-l1\"");
        assert_eq!(Scope::parse("web-l2"), Some(Scope::WebL2));
        assert_eq!(Scope::parse("web"), None);
    }

    #[test]
    fn test_stream_event_protocol() {
        let chunk: StreamEvent =
            serde_json::from_str(r#"{"type":"chunk","text":"Theo lời dạy "}"#).unwrap();
        assert_eq!(
            chunk,
            StreamEvent::Chunk {
                text: "Theo lời dạy ".to_string()
            }
        );

        let done: StreamEvent = serde_json::from_str(r#"{"type":"done"}"#).unwrap();
        assert!(matches!(
            done,
            StreamEvent::Done { ref citations, ref attachments, metrics: None }
                if citations.is_empty() && attachments.is_empty()
        ));
    }

    #[test]
    fn test_message_ids_are_prefixed_and_unique() {
        let a = new_message_id(Role::Assistant);
        let b = new_message_id(Role::Assistant);
        assert!(a.starts_with("assistant_"));
        assert_ne!(a, b);
    }
}

use dioxus::prelude::*;
use hall_types::{Citation, SidecarPayload};
use serde_json::Value;

use super::json::JsonView;

/// Citations arrive either as a bare array or wrapped as `{citations: [...]}`.
pub fn decode_citations(data: &Value) -> Result<Vec<Citation>, serde_json::Error> {
    let list = match data {
        Value::Object(map) => map.get("citations").cloned().unwrap_or(Value::Array(Vec::new())),
        other => other.clone(),
    };
    serde_json::from_value(list)
}

#[component]
pub fn CitationsView(payload: SidecarPayload) -> Element {
    let citations = match decode_citations(&payload.data) {
        Ok(citations) => citations,
        Err(e) => {
            dioxus_logger::tracing::debug!("citations payload shown raw: {}", e);
            return rsx! { JsonView { payload } };
        }
    };
    let count = citations.len();

    rsx! {
        div {
            class: "plugin plugin-scroll",
            div {
                class: "plugin-padded",
                div {
                    class: "plugin-row",
                    h3 { class: "plugin-title", "Nguồn trích dẫn" }
                    span { class: "badge badge-secondary", "{count} nguồn" }
                }
                for (index, citation) in citations.into_iter().enumerate() {
                    div {
                        key: "{citation.doc_id}-{index}",
                        class: "citation",
                        div {
                            class: "plugin-row",
                            h4 { class: "citation-title", "{citation.title}" }
                            if let Some(url) = citation.url.clone() {
                                a {
                                    class: "icon-link",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "↗"
                                }
                            }
                        }
                        if let Some(quote) = citation.quote.clone() {
                            blockquote { class: "citation-quote", "\"{quote}\"" }
                        }
                        div {
                            class: "citation-meta",
                            if let Some(page) = citation.page {
                                span { "📄 Trang {page}" }
                            }
                            if let Some(ts) = citation.ts.clone() {
                                span { "🕒 {ts}" }
                            }
                        }
                        if index + 1 < count {
                            hr { class: "separator" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_bare_array() {
        let data = json!([{ "docId": "sutra_001", "title": "Kinh Kim Cương", "page": 15 }]);
        let citations = decode_citations(&data).unwrap();
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].page, Some(15));
    }

    #[test]
    fn accepts_wrapped_list() {
        let data = json!({ "citations": [{ "docId": "a", "title": "A", "ts": "00:15:30" }] });
        let citations = decode_citations(&data).unwrap();
        assert_eq!(citations[0].ts.as_deref(), Some("00:15:30"));

        assert!(decode_citations(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn rejects_other_shapes() {
        decode_citations(&json!("Kinh Kim Cương")).expect_err("string is not a citation list");
        decode_citations(&json!([{ "title": "missing docId" }])).expect_err("docId is required");
    }
}

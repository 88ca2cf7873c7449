use dioxus::prelude::*;
use hall_types::{AttachmentDoc, DocKind, SidecarPayload};

use super::json::JsonView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocBlock {
    Heading1(String),
    Heading2(String),
    Bullet(String),
    Paragraph(String),
    Break,
}

/// Line-oriented markdown subset: `# `, `## `, `- ` and plain paragraphs.
pub fn doc_blocks(content: &str) -> Vec<DocBlock> {
    content
        .split('\n')
        .map(|line| {
            if let Some(rest) = line.strip_prefix("# ") {
                DocBlock::Heading1(rest.to_string())
            } else if let Some(rest) = line.strip_prefix("## ") {
                DocBlock::Heading2(rest.to_string())
            } else if let Some(rest) = line.strip_prefix("- ") {
                DocBlock::Bullet(rest.to_string())
            } else if line.trim().is_empty() {
                DocBlock::Break
            } else {
                DocBlock::Paragraph(line.to_string())
            }
        })
        .collect()
}

#[component]
pub fn DocView(payload: SidecarPayload) -> Element {
    let doc: AttachmentDoc = match serde_json::from_value(payload.data.clone()) {
        Ok(doc) => doc,
        Err(e) => {
            dioxus_logger::tracing::debug!("doc payload shown raw: {}", e);
            return rsx! { JsonView { payload } };
        }
    };

    match doc.kind {
        DocKind::Pdf => rsx! { PdfDoc { doc } },
        DocKind::Md => rsx! { MarkdownDoc { doc } },
    }
}

#[component]
fn PdfDoc(doc: AttachmentDoc) -> Element {
    let title = doc.title.clone().unwrap_or_else(|| "PDF Document".to_string());

    rsx! {
        div {
            class: "plugin",
            div {
                class: "plugin-header",
                div {
                    h3 { class: "plugin-title", "{title}" }
                    span { class: "badge badge-secondary", "PDF" }
                }
                div {
                    class: "plugin-actions",
                    if let Some(url) = doc.url.clone() {
                        a { class: "btn btn-outline", href: "{url}", download: "", "Tải xuống" }
                        a {
                            class: "btn btn-outline",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Mở"
                        }
                    }
                }
            }
            div {
                class: "plugin-placeholder",
                div { class: "placeholder-icon", "📄" }
                p { "PDF Viewer" }
                p { class: "muted", "Trình xem PDF sẽ được tích hợp tại đây" }
            }
        }
    }
}

#[component]
fn MarkdownDoc(doc: AttachmentDoc) -> Element {
    let title = doc
        .title
        .clone()
        .unwrap_or_else(|| "Markdown Document".to_string());
    let blocks = doc_blocks(doc.content.as_deref().unwrap_or_default());

    rsx! {
        div {
            class: "plugin",
            div {
                class: "plugin-header",
                div {
                    h3 { class: "plugin-title", "{title}" }
                    span { class: "badge badge-secondary", "Markdown" }
                }
                if let Some(url) = doc.url.clone() {
                    a {
                        class: "btn btn-outline",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Mở"
                    }
                }
            }
            div {
                class: "plugin-body plugin-padded doc-prose",
                for (index, block) in blocks.into_iter().enumerate() {
                    match block {
                        DocBlock::Heading1(text) => rsx! { h1 { key: "{index}", "{text}" } },
                        DocBlock::Heading2(text) => rsx! { h2 { key: "{index}", "{text}" } },
                        DocBlock::Bullet(text) => rsx! { li { key: "{index}", "{text}" } },
                        DocBlock::Paragraph(text) => rsx! { p { key: "{index}", "{text}" } },
                        DocBlock::Break => rsx! { br { key: "{index}" } },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_markdown_subset() {
        let blocks = doc_blocks("# Thiền môn nhật tụng\n\n## Công phu sáng\n- Tọa thiền 30 phút\nTụng kinh");
        assert_eq!(
            blocks,
            vec![
                DocBlock::Heading1("Thiền môn nhật tụng".into()),
                DocBlock::Break,
                DocBlock::Heading2("Công phu sáng".into()),
                DocBlock::Bullet("Tọa thiền 30 phút".into()),
                DocBlock::Paragraph("Tụng kinh".into()),
            ]
        );
    }

    #[test]
    fn heading_markers_need_a_space() {
        assert_eq!(doc_blocks("#tag"), vec![DocBlock::Paragraph("#tag".into())]);
        assert_eq!(doc_blocks("   "), vec![DocBlock::Break]);
    }

    #[test]
    fn doc_attachment_decodes_with_type_tag() {
        let data = serde_json::json!({ "type": "doc", "kind": "pdf", "url": "/docs/a.pdf" });
        let doc: AttachmentDoc = serde_json::from_value(data).unwrap();
        assert_eq!(doc.kind, DocKind::Pdf);
        assert!(doc.content.is_none());
    }
}

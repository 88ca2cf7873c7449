use dioxus::prelude::*;
use hall_types::SidecarPayload;
use serde_json::Value;

use crate::interop::copy_text_to_clipboard;

pub fn pretty_json(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

pub fn raw_title(payload: &SidecarPayload) -> String {
    payload
        .title()
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("{} Data", payload.kind))
}

#[component]
pub fn JsonView(payload: SidecarPayload) -> Element {
    let title = raw_title(&payload);
    let pretty = pretty_json(&payload.data);
    let to_copy = pretty.clone();

    rsx! {
        div {
            class: "plugin",
            div {
                class: "plugin-header",
                div {
                    h3 { class: "plugin-title", "{title}" }
                    span { class: "badge badge-secondary", "JSON" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| copy_text_to_clipboard(&to_copy),
                    "Copy JSON"
                }
            }
            div {
                class: "plugin-body",
                pre { class: "plugin-json", "{pretty}" }
            }
        }
    }
}

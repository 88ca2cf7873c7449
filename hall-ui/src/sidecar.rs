//! Sidecar - the side panel that shows citations, documents, tables and charts.
//!
//! Reads the shared [`SidecarStore`] from context and hands the active payload
//! to the renderer picked by the registry.

use dioxus::prelude::*;

use crate::hall::SidecarStore;

pub mod plugins;
pub mod registry;

pub use registry::{lookup, plugin_for, PluginId, PluginInfo, PluginView, REGISTRY};

#[component]
pub fn SidecarPane(width: i32) -> Element {
    let mut sidecar = use_context::<Signal<SidecarStore>>();
    let store = sidecar.read().clone();
    let style = format!("width: {width}px;");

    let Some(current) = store.active_payload().cloned() else {
        return rsx! {
            aside {
                class: "sidecar sidecar-empty",
                style: "{style}",
                SidecarEmpty {}
            }
        };
    };

    let active = store.active_tab();
    let len = store.len();
    let plugin = lookup(&current);

    rsx! {
        aside {
            class: "sidecar",
            style: "{style}",
            div {
                class: "sidecar-header",
                div {
                    class: "sidecar-row",
                    h2 { class: "sidecar-heading", "Chi tiết" }
                    if len > 1 {
                        div {
                            class: "sidecar-nav",
                            button {
                                class: "icon-btn",
                                disabled: active == 0,
                                onclick: move |_| sidecar.write().set_active_tab(active.saturating_sub(1)),
                                "‹"
                            }
                            button {
                                class: "icon-btn",
                                disabled: active + 1 == len,
                                onclick: move |_| sidecar.write().set_active_tab(active + 1),
                                "›"
                            }
                        }
                    }
                }
                if len > 1 {
                    div {
                        class: "sidecar-tabs",
                        for (index, payload) in store.payloads().iter().enumerate() {
                            div {
                                key: "{index}",
                                class: if index == active { "sidecar-tab active" } else { "sidecar-tab" },
                                onclick: move |_| sidecar.write().set_active_tab(index),
                                span { class: "truncate", "{payload.label()}" }
                                button {
                                    class: "tab-close",
                                    onclick: move |e: Event<MouseData>| {
                                        e.stop_propagation();
                                        sidecar.write().close(index);
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                } else {
                    div {
                        class: "sidecar-row",
                        div {
                            class: "sidecar-title",
                            span { "{current.label()}" }
                            span { class: "badge badge-outline", "{plugin.label}" }
                        }
                        button {
                            class: "icon-btn",
                            onclick: move |_| sidecar.write().close(0),
                            "×"
                        }
                    }
                }
            }
            div {
                class: "sidecar-content",
                PluginView { payload: current.clone() }
            }
        }
    }
}

#[component]
pub fn SidecarEmpty() -> Element {
    rsx! {
        div {
            class: "sidecar-empty-hint",
            div { class: "placeholder-icon", "📋" }
            p { "Nhấn vào trích dẫn hoặc biểu đồ" }
            p { "để xem chi tiết tại đây" }
        }
    }
}

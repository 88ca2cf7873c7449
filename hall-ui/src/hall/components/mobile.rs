use dioxus::prelude::*;

use crate::hall::SidecarStore;
use crate::interop::copy_text_to_clipboard;
use crate::sidecar::plugins::json::pretty_json;
use crate::sidecar::{PluginView, SidecarEmpty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerSide {
    Left,
    Right,
}

impl DrawerSide {
    fn class(self) -> &'static str {
        match self {
            DrawerSide::Left => "drawer drawer-left",
            DrawerSide::Right => "drawer drawer-right",
        }
    }
}

/// "n / len" for the mobile Sidecar header; hidden with a single payload.
pub fn position_label(active: usize, len: usize) -> Option<String> {
    (len > 1).then(|| format!("{} / {}", active + 1, len))
}

#[component]
pub fn MobileHeader(
    is_streaming: bool,
    on_open_left: Callback<()>,
    on_open_right: Callback<()>,
) -> Element {
    let status = if is_streaming {
        "Thầy đang phản hồi..."
    } else {
        "Với Hòa Thượng Tuệ Sỹ"
    };

    rsx! {
        header {
            class: "mobile-header",
            button {
                class: "icon-btn",
                title: "Mở thanh điều hướng",
                onclick: move |_| on_open_left.call(()),
                "☰"
            }
            div {
                class: "mobile-title",
                h1 { "Đạo Tràng Ảo" }
                p {
                    class: "muted small",
                    if is_streaming {
                        span { class: "live-dot" }
                    }
                    "{status}"
                }
            }
            button {
                class: "icon-btn",
                title: "Mở bảng chi tiết",
                onclick: move |_| on_open_right.call(()),
                "◨"
            }
        }
    }
}

/// Slide-in panel over the chat, dismissed by tapping the backdrop.
#[component]
pub fn Drawer(side: DrawerSide, open: bool, on_close: Callback<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| on_close.call(()),
        }
        div {
            class: "{side.class()}",
            {children}
        }
    }
}

#[component]
pub fn MobileSidecar(on_close: Callback<()>) -> Element {
    let mut sidecar = use_context::<Signal<SidecarStore>>();
    let mut show_actions = use_signal(|| false);
    let store = sidecar.read().clone();

    let Some(current) = store.active_payload().cloned() else {
        return rsx! {
            div {
                class: "mobile-sidecar",
                div {
                    class: "mobile-sidecar-header",
                    h2 { "Chi tiết" }
                    button { class: "icon-btn", onclick: move |_| on_close.call(()), "×" }
                }
                SidecarEmpty {}
            }
        };
    };

    let active = store.active_tab();
    let len = store.len();
    let raw = pretty_json(&current.data);

    rsx! {
        div {
            class: "mobile-sidecar",
            div {
                class: "mobile-sidecar-header",
                button { class: "icon-btn", onclick: move |_| on_close.call(()), "×" }
                div {
                    class: "mobile-sidecar-title",
                    h2 { class: "truncate", "{current.label()}" }
                    if let Some(position) = position_label(active, len) {
                        p { class: "muted small", "{position}" }
                    }
                }
                if len > 1 {
                    button {
                        class: "icon-btn",
                        disabled: active == 0,
                        onclick: move |_| sidecar.write().prev_tab(),
                        "‹"
                    }
                    button {
                        class: "icon-btn",
                        disabled: active + 1 == len,
                        onclick: move |_| sidecar.write().next_tab(),
                        "›"
                    }
                }
                button {
                    class: "icon-btn",
                    onclick: move |_| show_actions.toggle(),
                    "⋮"
                }
            }
            if show_actions() {
                div {
                    class: "mobile-sidecar-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| copy_text_to_clipboard(&raw),
                        "Sao chép"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            sidecar.write().close(active);
                            show_actions.set(false);
                        },
                        "Đóng"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based() {
        assert_eq!(position_label(0, 3).as_deref(), Some("1 / 3"));
        assert_eq!(position_label(2, 3).as_deref(), Some("3 / 3"));
    }

    #[test]
    fn single_payload_has_no_position() {
        assert_eq!(position_label(0, 1), None);
        assert_eq!(position_label(0, 0), None);
    }
}

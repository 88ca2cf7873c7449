use dioxus::prelude::*;

#[component]
pub fn ChatHeader(
    title: String,
    left_collapsed: bool,
    right_open: bool,
    on_show_left: Callback<()>,
    on_show_right: Callback<()>,
) -> Element {
    rsx! {
        header {
            class: "chat-header",
            div {
                class: "chat-header-title",
                if left_collapsed {
                    button {
                        class: "icon-btn",
                        title: "Mở thanh điều hướng",
                        onclick: move |_| on_show_left.call(()),
                        "☰"
                    }
                }
                h1 { "{title}" }
            }
            if !right_open {
                button {
                    class: "icon-btn",
                    title: "Mở bảng chi tiết",
                    onclick: move |_| on_show_right.call(()),
                    "◨"
                }
            }
        }
    }
}

use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;
use hall_types::AgentConfig;

use crate::components::composer::initial_agent;
use crate::components::{Composer, MessageList, VoiceComposer, HALL_STYLES};
use crate::config::hall_config;
use crate::hall::actions::send_message;
use crate::hall::components::{
    ChatHeader, Drawer, DrawerSide, LeftNav, MobileHeader, MobileSidecar, NavRail, ResizeHandle,
};
use crate::hall::effects::{use_hotkeys, use_prefs_sync, use_viewport_tracking};
use crate::hall::layout_store::RESIZE_HANDLE_WIDTH;
use crate::hall::prefs::{load_prefs, open_storage, PrefsStorage};
use crate::hall::{Conversation, LayoutStore, SidecarStore};
use crate::mock_data::{mock_messages, DEFAULT_CHAT_TITLE};
use crate::sidecar::SidecarPane;
use crate::stream::{response_source, ResponseSource};

const MOBILE_DRAWER_WIDTH: i32 = 300;

/// Root of the hall. Provides the shared stores to every pane and switches
/// between the desktop three-pane layout and the mobile drawers.
#[component]
pub fn HallShell() -> Element {
    let storage: Rc<dyn PrefsStorage> = use_hook(open_storage);
    let source: Rc<dyn ResponseSource> = use_hook(|| response_source(hall_config()));

    let prefs_storage = storage.clone();
    let layout = use_context_provider(move || {
        Signal::new(LayoutStore::from_prefs(load_prefs(prefs_storage.as_ref())))
    });
    let sidecar = use_context_provider(|| Signal::new(SidecarStore::new()));
    let conversation =
        use_context_provider(|| Signal::new(Conversation::new(mock_messages(Utc::now()))));
    let agent = use_context_provider(|| Signal::new(initial_agent(hall_config())));

    use_viewport_tracking(layout);
    use_hotkeys(layout, sidecar);
    use_prefs_sync(layout, storage);

    let on_send = use_callback(move |text: String| {
        let config: AgentConfig = agent.read().clone();
        send_message(conversation, source.clone(), text, config);
    });

    let store = *layout.read();
    let is_streaming = conversation.read().is_streaming();

    rsx! {
        style { {HALL_STYLES} }
        if store.is_mobile() {
            MobileHall { store, is_streaming, on_send }
        } else {
            DesktopHall { store, is_streaming, on_send }
        }
    }
}

#[component]
fn DesktopHall(store: LayoutStore, is_streaming: bool, on_send: Callback<String>) -> Element {
    let mut layout = use_context::<Signal<LayoutStore>>();
    let left_handle = if store.left_collapsed() { 0 } else { RESIZE_HANDLE_WIDTH };
    let occupied = store.effective_left_width() + left_handle + store.right_footprint();

    rsx! {
        div {
            class: "hall-shell",
            if store.left_collapsed() {
                NavRail {
                    width: store.effective_left_width(),
                    on_expand: move |_| layout.write().set_left_collapsed(false),
                }
            } else {
                LeftNav {
                    width: store.effective_left_width(),
                    on_collapse: move |_| layout.write().set_left_collapsed(true),
                }
                ResizeHandle {
                    on_resize: move |delta: i32| layout.write().resize_left(delta),
                    on_double_click: move |_| layout.write().reset_widths(),
                }
            }

            main {
                class: "hall-center",
                style: "max-width: calc(100% - {occupied}px);",
                ChatHeader {
                    title: DEFAULT_CHAT_TITLE.to_string(),
                    left_collapsed: store.left_collapsed(),
                    right_open: store.right_open(),
                    on_show_left: move |_| layout.write().set_left_collapsed(false),
                    on_show_right: move |_| layout.write().set_right_open(true),
                }
                MessageList { on_follow_up: on_send }
                Composer { is_streaming, on_send }
            }

            if store.right_open() {
                ResizeHandle {
                    on_resize: move |delta: i32| layout.write().resize_right(delta),
                    on_double_click: move |_| layout.write().reset_widths(),
                }
                SidecarPane { width: store.right_width() }
            }
        }
    }
}

#[component]
fn MobileHall(store: LayoutStore, is_streaming: bool, on_send: Callback<String>) -> Element {
    let mut layout = use_context::<Signal<LayoutStore>>();

    rsx! {
        div {
            class: "hall-mobile",
            MobileHeader {
                is_streaming,
                on_open_left: move |_| layout.write().set_left_drawer_open(true),
                on_open_right: move |_| layout.write().set_right_drawer_open(true),
            }
            MessageList { on_follow_up: on_send }
            VoiceComposer { is_streaming, on_send }

            Drawer {
                side: DrawerSide::Left,
                open: store.left_drawer_open(),
                on_close: move |_| layout.write().set_left_drawer_open(false),
                LeftNav {
                    width: MOBILE_DRAWER_WIDTH,
                    on_collapse: move |_| layout.write().set_left_drawer_open(false),
                }
            }
            Drawer {
                side: DrawerSide::Right,
                open: store.right_drawer_open(),
                on_close: move |_| layout.write().set_right_drawer_open(false),
                MobileSidecar {
                    on_close: move |_| layout.write().set_right_drawer_open(false),
                }
            }
        }
    }
}

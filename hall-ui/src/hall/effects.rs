use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::hall::hotkeys::{action_for, apply, HotkeyAction, Modifiers};
use crate::hall::layout_store::is_mobile_width;
use crate::hall::prefs::{PrefsStorage, PrefsSync};
use crate::hall::{LayoutStore, SidecarStore};
use crate::interop::{document_target, viewport_width, window_target, ListenerGuard};

/// Keep `is_mobile` in step with the viewport for as long as the calling
/// component is mounted.
pub fn use_viewport_tracking(layout: Signal<LayoutStore>) {
    let mut guards = use_signal(Vec::<ListenerGuard>::new);

    use_effect(move || {
        if !guards.peek().is_empty() {
            return;
        }

        sync_mobile_flag(layout);

        let Some(window) = window_target() else {
            return;
        };
        let mut attached = Vec::new();
        for event in ["resize", "orientationchange"] {
            if let Some(guard) =
                ListenerGuard::attach(&window, event, move |_| sync_mobile_flag(layout))
            {
                attached.push(guard);
            }
        }
        guards.set(attached);
    });
}

/// Writes only on change so resize ticks do not re-render the shell.
fn sync_mobile_flag(mut layout: Signal<LayoutStore>) {
    let Some(width) = viewport_width() else {
        return;
    };
    let mobile = is_mobile_width(width);
    if layout.peek().is_mobile() != mobile {
        layout.write().set_is_mobile(mobile);
    }
}

fn key_modifiers(event: &web_sys::KeyboardEvent) -> Modifiers {
    Modifiers {
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    }
}

fn target_is_editable(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|element| {
            matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
                || element.is_content_editable()
        })
        .unwrap_or(false)
}

/// Document-level keyboard shortcuts for the pane layout and Sidecar tabs.
pub fn use_hotkeys(mut layout: Signal<LayoutStore>, mut sidecar: Signal<SidecarStore>) {
    let mut guard = use_signal(|| None::<ListenerGuard>);

    use_effect(move || {
        if guard.peek().is_some() {
            return;
        }
        let Some(document) = document_target() else {
            return;
        };

        let listener = ListenerGuard::attach(&document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let Some(action) = action_for(&key_event.key(), key_modifiers(key_event)) else {
                return;
            };
            // Bare bracket keys are text while typing.
            if matches!(action, HotkeyAction::PrevTab | HotkeyAction::NextTab)
                && target_is_editable(&event)
            {
                return;
            }

            event.prevent_default();
            apply(action, &mut layout.write(), &mut sidecar.write());
        });
        guard.set(listener);
    });
}

/// Persist the layout preferences whenever they change.
pub fn use_prefs_sync(layout: Signal<LayoutStore>, storage: std::rc::Rc<dyn PrefsStorage>) {
    let initial = layout.peek().prefs();
    let mut sync = use_signal(|| PrefsSync::new(initial));

    use_effect(move || {
        let prefs = layout.read().prefs();
        if let Err(e) = sync.write().observe(storage.as_ref(), prefs) {
            dioxus_logger::tracing::warn!("Failed to save layout preferences: {}", e);
        }
    });
}

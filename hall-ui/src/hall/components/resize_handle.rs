use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::hall::resize::{Axis, DeltaQueue, ResizeGesture};
use crate::interop::{document_target, ListenerGuard};

/// Document listeners that live for one drag.
struct DragListeners {
    _move: ListenerGuard,
    _up: ListenerGuard,
}

/// Draggable pane divider. Calls `on_resize` once per pointer move with the
/// incremental delta along `axis`; double-click fires `on_double_click`.
#[component]
pub fn ResizeHandle(
    on_resize: Callback<i32>,
    on_double_click: Callback<()>,
    #[props(default = Axis::Horizontal)] axis: Axis,
) -> Element {
    let start_gesture = use_hook(|| Rc::new(Cell::new(ResizeGesture::Idle)));
    let mut listeners = use_signal(|| None::<DragListeners>);
    let mut dragging = use_signal(|| false);
    let mut pending = use_signal(DeltaQueue::default);

    // Raw document listeners only touch signals; the effects below act on them.
    use_effect(move || {
        if !dragging() && listeners.peek().is_some() {
            listeners.set(None);
        }
    });
    use_effect(move || {
        if pending.read().is_empty() {
            return;
        }
        let deltas = pending.write().drain();
        for delta in deltas {
            on_resize.call(delta);
        }
    });

    let on_pointer_down = move |e: Event<PointerData>| {
        e.prevent_default();
        let point = e.data().client_coordinates();
        let mut next = start_gesture.get();
        next.start(axis.pick(point.x as i32, point.y as i32));
        start_gesture.set(next);
        dragging.set(true);

        let Some(document) = document_target() else {
            return;
        };

        let move_gesture = start_gesture.clone();
        let on_move = ListenerGuard::attach(&document, "pointermove", move |event| {
            let Some(pointer) = event.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let mut state = move_gesture.get();
            let delta = state.move_to(axis.pick(pointer.client_x(), pointer.client_y()));
            move_gesture.set(state);
            if let Some(delta) = delta {
                pending.write().push(delta);
            }
        });

        let up_gesture = start_gesture.clone();
        let on_up = ListenerGuard::attach(&document, "pointerup", move |_| {
            let mut state = up_gesture.get();
            if state.end() {
                up_gesture.set(state);
                dragging.set(false);
            }
        });

        if let (Some(on_move), Some(on_up)) = (on_move, on_up) {
            listeners.set(Some(DragListeners {
                _move: on_move,
                _up: on_up,
            }));
        }
    };

    let label = match axis {
        Axis::Horizontal => "Resize horizontal handle",
        Axis::Vertical => "Resize vertical handle",
    };
    let class = if dragging() {
        "resize-handle dragging"
    } else {
        "resize-handle"
    };

    rsx! {
        div {
            class: "{class}",
            style: "cursor: {axis.cursor()};",
            role: "separator",
            aria_label: "{label}",
            onpointerdown: on_pointer_down,
            ondoubleclick: move |_| on_double_click.call(()),
            div { class: "resize-grip" }
        }
    }
}

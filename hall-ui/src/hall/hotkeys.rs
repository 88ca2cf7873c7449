use crate::hall::{LayoutStore, SidecarStore};

pub const WIDTH_STEP_PX: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    ToggleLeftPane,
    ToggleRightPane,
    WidenRightPane,
    NarrowRightPane,
    PrevTab,
    NextTab,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }
}

/// Map a `KeyboardEvent.key` and its modifiers to a shell action.
pub fn action_for(key: &str, mods: Modifiers) -> Option<HotkeyAction> {
    if mods.alt {
        return match key {
            "1" => Some(HotkeyAction::ToggleLeftPane),
            "3" => Some(HotkeyAction::ToggleRightPane),
            "=" => Some(HotkeyAction::WidenRightPane),
            "-" => Some(HotkeyAction::NarrowRightPane),
            _ => None,
        };
    }
    if mods.ctrl || mods.meta {
        return None;
    }
    match key {
        "[" => Some(HotkeyAction::PrevTab),
        "]" => Some(HotkeyAction::NextTab),
        _ => None,
    }
}

pub fn apply(action: HotkeyAction, layout: &mut LayoutStore, sidecar: &mut SidecarStore) {
    match action {
        HotkeyAction::ToggleLeftPane => layout.toggle_left_pane(),
        HotkeyAction::ToggleRightPane => layout.toggle_right_pane(),
        HotkeyAction::WidenRightPane => layout.set_right_width(layout.right_width() + WIDTH_STEP_PX),
        HotkeyAction::NarrowRightPane => {
            layout.set_right_width(layout.right_width() - WIDTH_STEP_PX)
        }
        HotkeyAction::PrevTab => sidecar.prev_tab(),
        HotkeyAction::NextTab => sidecar.next_tab(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hall_types::{SidecarPayload, SidecarType};
    use serde_json::json;

    #[test]
    fn alt_shortcuts() {
        let alt = Modifiers::alt();
        assert_eq!(action_for("1", alt), Some(HotkeyAction::ToggleLeftPane));
        assert_eq!(action_for("3", alt), Some(HotkeyAction::ToggleRightPane));
        assert_eq!(action_for("=", alt), Some(HotkeyAction::WidenRightPane));
        assert_eq!(action_for("-", alt), Some(HotkeyAction::NarrowRightPane));
        assert_eq!(action_for("2", alt), None);
        assert_eq!(action_for("1", Modifiers::default()), None);
    }

    #[test]
    fn bracket_shortcuts_need_bare_keys() {
        let none = Modifiers::default();
        assert_eq!(action_for("[", none), Some(HotkeyAction::PrevTab));
        assert_eq!(action_for("]", none), Some(HotkeyAction::NextTab));

        let ctrl = Modifiers {
            ctrl: true,
            ..none
        };
        let meta = Modifiers {
            meta: true,
            ..none
        };
        assert_eq!(action_for("[", ctrl), None);
        assert_eq!(action_for("]", meta), None);
        assert_eq!(action_for("]", Modifiers::alt()), None);
    }

    #[test]
    fn width_step_is_clamped() {
        let mut layout = LayoutStore::default();
        let mut sidecar = SidecarStore::new();

        apply(HotkeyAction::WidenRightPane, &mut layout, &mut sidecar);
        assert_eq!(layout.right_width(), 460);
        for _ in 0..10 {
            apply(HotkeyAction::WidenRightPane, &mut layout, &mut sidecar);
        }
        assert_eq!(layout.right_width(), 560);
        for _ in 0..10 {
            apply(HotkeyAction::NarrowRightPane, &mut layout, &mut sidecar);
        }
        assert_eq!(layout.right_width(), 320);
    }

    #[test]
    fn tab_shortcuts_move_cursor() {
        let mut layout = LayoutStore::default();
        let mut sidecar = SidecarStore::new();
        sidecar.push(SidecarPayload::new(SidecarType::Doc, json!({})).with_meta("a", "m1"));
        sidecar.push(SidecarPayload::new(SidecarType::Doc, json!({})).with_meta("b", "m2"));

        apply(HotkeyAction::NextTab, &mut layout, &mut sidecar);
        assert_eq!(sidecar.active_tab(), 0);
        apply(HotkeyAction::PrevTab, &mut layout, &mut sidecar);
        assert_eq!(sidecar.active_tab(), 1);
    }

    #[test]
    fn pane_toggles() {
        let mut layout = LayoutStore::default();
        let mut sidecar = SidecarStore::new();
        apply(HotkeyAction::ToggleLeftPane, &mut layout, &mut sidecar);
        apply(HotkeyAction::ToggleRightPane, &mut layout, &mut sidecar);
        assert!(layout.left_collapsed());
        assert!(layout.right_open());
    }
}

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub icon: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Follow-ups offered under a finished assistant reply. Sent immediately.
pub const FOLLOW_UP_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "📄",
        label: "Tóm tắt",
        prompt: "Hãy tóm tắt nội dung trên một cách ngắn gọn và dễ hiểu.",
    },
    QuickAction {
        icon: "❔",
        label: "Giải thích đơn giản",
        prompt: "Hãy giải thích nội dung trên một cách đơn giản, dễ hiểu hơn.",
    },
    QuickAction {
        icon: "📈",
        label: "Giải thích chuyên sâu",
        prompt: "Hãy giải thích nội dung trên một cách chuyên sâu và chi tiết hơn.",
    },
    QuickAction {
        icon: "💬",
        label: "Hỏi thêm",
        prompt: "Hãy đưa ra một câu hỏi tiếp theo liên quan đến nội dung trên.",
    },
];

/// Prompt templates the composer drops into its textarea.
pub const COMPOSER_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "📄",
        label: "Tóm tắt",
        prompt: "Hãy tóm tắt nội dung này một cách ngắn gọn.",
    },
    QuickAction {
        icon: "❔",
        label: "Giải thích đơn giản",
        prompt: "Hãy giải thích điều này như dành cho học sinh.",
    },
    QuickAction {
        icon: "📊",
        label: "Tạo bảng/biểu đồ",
        prompt: "Hãy tạo bảng hoặc biểu đồ để minh họa.",
    },
    QuickAction {
        icon: "✨",
        label: "Hỏi tiếp",
        prompt: "Hãy đưa ra câu hỏi tiếp theo liên quan.",
    },
];

#[component]
pub fn QuickActions(
    caption: &'static str,
    actions: &'static [QuickAction],
    on_action: Callback<String>,
) -> Element {
    rsx! {
        div {
            class: "quick-actions",
            span { class: "muted small", "{caption}" }
            for action in actions.iter() {
                button {
                    key: "{action.label}",
                    r#type: "button",
                    class: "chip",
                    onclick: move |_| on_action.call(action.prompt.to_string()),
                    span { class: "chip-icon", "{action.icon}" }
                    "{action.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique_within_each_set() {
        for set in [&FOLLOW_UP_ACTIONS, &COMPOSER_ACTIONS] {
            let mut labels: Vec<_> = set.iter().map(|a| a.label).collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), set.len());
        }
    }

    #[test]
    fn prompts_are_requests() {
        for action in FOLLOW_UP_ACTIONS.iter().chain(COMPOSER_ACTIONS.iter()) {
            assert!(action.prompt.starts_with("Hãy "), "{}", action.label);
        }
    }
}

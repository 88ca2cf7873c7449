use dioxus::prelude::*;
use hall_types::{AgentConfig, KnowledgeLevel, Scope};

use super::quick_actions::{QuickActions, COMPOSER_ACTIONS};
use crate::config::{hall_config, HallConfig};
use crate::mock_data::session_agent;

pub fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Corpus => "Chỉ cơ sở dữ liệu",
        Scope::WebL1 => "Web cấp 1",
        Scope::WebL2 => "Web cấp 2",
    }
}

pub fn knowledge_level_label(level: KnowledgeLevel) -> &'static str {
    match level {
        KnowledgeLevel::Beginner => "Đại chúng",
        KnowledgeLevel::Basic => "Sơ cơ",
        KnowledgeLevel::Intermediate => "Trung cấp",
        KnowledgeLevel::Advanced => "Cao cấp",
    }
}

/// Agent a session starts with (and resets to), honoring `?agent=`.
pub fn initial_agent(config: &HallConfig) -> AgentConfig {
    let mut agent = session_agent();
    if let Some(id) = &config.agent_id {
        agent.id = id.clone();
    }
    agent
}

/// Slider input snapped to one decimal in `[0, 1]`.
pub fn parse_temperature(raw: &str) -> Option<f32> {
    let value: f32 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((value.clamp(0.0, 1.0) * 10.0).round() / 10.0)
}

pub fn format_temperature(value: f32) -> String {
    format!("{value:.1}")
}

/// Desktop prompt box with agent settings.
#[component]
pub fn Composer(is_streaming: bool, on_send: Callback<String>) -> Element {
    let mut agent = use_context::<Signal<AgentConfig>>();
    let mut draft = use_signal(String::new);
    let mut show_config = use_signal(|| false);

    let submit = use_callback(move |_| {
        let text = draft.read().trim().to_string();
        if text.is_empty() || is_streaming {
            return;
        }
        on_send.call(text);
        draft.set(String::new());
    });

    let onkeydown = move |e: KeyboardEvent| {
        let mods = e.modifiers();
        if e.key() == Key::Enter && (mods.ctrl() || mods.meta()) {
            e.prevent_default();
            submit.call(());
        }
    };

    let config = agent.read().clone();
    let level = config.knowledge_level.unwrap_or_default();
    let temperature = format_temperature(config.temperature);
    let can_send = !is_streaming && !draft.read().trim().is_empty();

    rsx! {
        div {
            class: "composer",
            div {
                class: "composer-badges",
                span { class: "badge badge-outline", "{config.name}" }
                span { class: "badge badge-secondary", "{scope_label(config.scope)}" }
                if config.citations {
                    span { class: "badge badge-outline", "Có trích dẫn" }
                }
                span { class: "badge badge-outline", "Nhiệt độ: {temperature}" }
            }

            QuickActions {
                caption: "Thao tác nhanh:",
                actions: &COMPOSER_ACTIONS[..],
                on_action: move |prompt: String| draft.set(prompt),
            }

            div {
                class: "composer-box",
                textarea {
                    class: "composer-input",
                    placeholder: "Nhập câu hỏi của bạn... (Ctrl+Enter để gửi)",
                    value: "{draft}",
                    disabled: is_streaming,
                    oninput: move |e: FormEvent| draft.set(e.value()),
                    onkeydown,
                }
                div {
                    class: "composer-toolbar",
                    button {
                        r#type: "button",
                        class: if show_config() { "icon-btn active" } else { "icon-btn" },
                        title: "Cấu hình Agent",
                        onclick: move |_| show_config.toggle(),
                        "⚙"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: !can_send,
                        onclick: move |_| submit.call(()),
                        "➤"
                    }
                }
                if show_config() {
                    AgentConfigPanel {}
                }
            }

            div {
                class: "chat-controls",
                select {
                    class: "pill-select",
                    value: "{level.as_str()}",
                    onchange: move |e: FormEvent| {
                        if let Some(level) = KnowledgeLevel::parse(&e.value()) {
                            agent.write().knowledge_level = Some(level);
                        }
                    },
                    for choice in KnowledgeLevel::ALL {
                        option {
                            key: "{choice.as_str()}",
                            value: "{choice.as_str()}",
                            selected: choice == level,
                            "{knowledge_level_label(choice)}"
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: if config.citations { "pill pill-on" } else { "pill" },
                    onclick: move |_| {
                        let mut agent = agent.write();
                        agent.citations = !agent.citations;
                    },
                    "Trích dẫn"
                }
            }

            if is_streaming {
                div {
                    class: "composer-status muted small",
                    span { class: "live-dot" }
                    "Đang xử lý..."
                }
            }
        }
    }
}

#[component]
fn AgentConfigPanel() -> Element {
    let mut agent = use_context::<Signal<AgentConfig>>();
    let config = agent.read().clone();
    let temperature = format_temperature(config.temperature);

    rsx! {
        div {
            class: "config-panel",
            h4 { "Cấu hình Agent" }
            label {
                class: "config-row",
                span { "Hiển thị trích dẫn" }
                input {
                    r#type: "checkbox",
                    checked: config.citations,
                    onchange: move |_| {
                        let mut agent = agent.write();
                        agent.citations = !agent.citations;
                    },
                }
            }
            label {
                class: "config-field",
                span { "Phạm vi tìm kiếm" }
                select {
                    value: "{config.scope.as_str()}",
                    onchange: move |e: FormEvent| {
                        if let Some(scope) = Scope::parse(&e.value()) {
                            agent.write().scope = scope;
                        }
                    },
                    for scope in Scope::ALL {
                        option {
                            key: "{scope.as_str()}",
                            value: "{scope.as_str()}",
                            selected: scope == config.scope,
                            "{scope_label(scope)}"
                        }
                    }
                }
            }
            label {
                class: "config-field",
                span { "Nhiệt độ: {temperature}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.1",
                    value: "{temperature}",
                    oninput: move |e: FormEvent| {
                        if let Some(value) = parse_temperature(&e.value()) {
                            agent.write().temperature = value;
                        }
                    },
                }
            }
            button {
                r#type: "button",
                class: "btn btn-outline btn-block",
                onclick: move |_| agent.set(initial_agent(hall_config())),
                "↺ Đặt lại mặc định"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_labels() {
        assert_eq!(scope_label(Scope::Corpus), "Chỉ cơ sở dữ liệu");
        assert_eq!(scope_label(Scope::WebL1), "Web cấp 1");
        assert_eq!(scope_label(Scope::WebL2), "Web cấp 2");
    }

    #[test]
    fn knowledge_level_labels_cover_every_level() {
        let labels: Vec<_> = KnowledgeLevel::ALL
            .into_iter()
            .map(knowledge_level_label)
            .collect();
        assert_eq!(labels, ["Đại chúng", "Sơ cơ", "Trung cấp", "Cao cấp"]);
    }

    #[test]
    fn temperature_snaps_and_clamps() {
        assert_eq!(parse_temperature("0.7"), Some(0.7));
        assert_eq!(parse_temperature("0.74"), Some(0.7));
        assert_eq!(parse_temperature("1.6"), Some(1.0));
        assert_eq!(parse_temperature("-0.2"), Some(0.0));
        assert_eq!(parse_temperature("abc"), None);
        assert_eq!(parse_temperature("NaN"), None);
    }

    #[test]
    fn temperature_formats_with_one_decimal() {
        assert_eq!(format_temperature(0.7), "0.7");
        assert_eq!(format_temperature(1.0), "1.0");
    }

    #[test]
    fn initial_agent_honors_override() {
        let plain = initial_agent(&HallConfig::default());
        assert_eq!(plain.id, "tuesy_agent");
        assert_eq!(plain.knowledge_level, Some(KnowledgeLevel::Basic));

        let config = HallConfig {
            agent_id: Some("guest_agent".into()),
            ..HallConfig::default()
        };
        assert_eq!(initial_agent(&config).id, "guest_agent");
    }
}

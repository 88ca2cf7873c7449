use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use gloo_timers::future::TimeoutFuture;
use hall_types::{AgentConfig, Scope};
use web_sys::MediaStream;

use crate::interop::{request_microphone, stop_media_stream};

/// Recognition is mocked: after this delay one of [`MOCK_TRANSCRIPTS`] is used.
pub const TRANSCRIBE_DELAY_MS: u32 = 3000;

pub const MOCK_TRANSCRIPTS: [&str; 3] = [
    "Xin Thầy giải thích về ý nghĩa của tâm bất sanh bất diệt?",
    "Làm thế nào để tu tập thiền trong đời sống hàng ngày?",
    "Phật giáo có những giáo lý gì về nghiệp báo?",
];

/// Map a uniform sample in `[0, 1)` onto a transcript.
pub fn pick_transcript(r: f64) -> &'static str {
    let last = MOCK_TRANSCRIPTS.len() - 1;
    let index = if r.is_finite() {
        ((r.max(0.0) * MOCK_TRANSCRIPTS.len() as f64) as usize).min(last)
    } else {
        0
    };
    MOCK_TRANSCRIPTS[index]
}

fn scope_badge(scope: Scope) -> &'static str {
    match scope {
        Scope::Corpus => "Cơ sở dữ liệu",
        Scope::WebL1 | Scope::WebL2 => "Web",
    }
}

/// Mobile composer with a push-to-talk voice mode.
#[component]
pub fn VoiceComposer(is_streaming: bool, on_send: Callback<String>) -> Element {
    let agent = use_context::<Signal<AgentConfig>>();
    let mut draft = use_signal(String::new);
    let mut transcript = use_signal(|| None::<String>);
    let mut voice_mode = use_signal(|| false);
    let mut listening = use_signal(|| false);
    let mut microphone = use_signal(|| None::<MediaStream>);
    let mut pending = use_signal(|| None::<Task>);

    let mut stop_listening = move || {
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        if let Some(stream) = microphone.write().take() {
            stop_media_stream(&stream);
        }
        listening.set(false);
    };

    use_drop(move || {
        if let Ok(mut held) = microphone.try_write() {
            if let Some(stream) = held.take() {
                stop_media_stream(&stream);
            }
        }
    });

    let start_listening = move |_| {
        if listening() {
            return;
        }
        listening.set(true);
        let task = spawn(async move {
            match request_microphone().await {
                Ok(stream) => {
                    microphone.set(Some(stream));
                    TimeoutFuture::new(TRANSCRIBE_DELAY_MS).await;
                    let text = pick_transcript(js_sys::Math::random());
                    transcript.set(Some(text.to_string()));
                    draft.set(text.to_string());
                }
                Err(e) => {
                    warn!("Error accessing microphone: {}", e);
                    voice_mode.set(false);
                }
            }
            pending.set(None);
            if let Some(stream) = microphone.write().take() {
                stop_media_stream(&stream);
            }
            listening.set(false);
        });
        pending.set(Some(task));
    };

    let mut submit = move || {
        let text = draft.read().trim().to_string();
        if text.is_empty() || is_streaming {
            return;
        }
        on_send.call(text);
        draft.set(String::new());
        transcript.set(None);
    };

    let config = agent.read().clone();

    if voice_mode() {
        return rsx! {
            div {
                class: "voice-composer",
                div {
                    class: "voice-header",
                    div {
                        class: "composer-badges",
                        span { class: "badge badge-primary", "🔊 Chế độ giọng nói" }
                        span { class: "badge badge-outline", "{config.name}" }
                    }
                    button {
                        class: "icon-btn",
                        title: "Chế độ văn bản",
                        onclick: move |_| {
                            stop_listening();
                            voice_mode.set(false);
                        },
                        "🔇"
                    }
                }
                div {
                    class: "voice-stage",
                    div {
                        class: if listening() { "voice-orb listening" } else { "voice-orb" },
                        "🎤"
                    }
                    p {
                        class: "muted small",
                        if listening() { "Đang nghe..." } else { "Nhấn để nói chuyện với Thầy" }
                    }
                    if let Some(text) = transcript() {
                        div { class: "voice-transcript", "{text}" }
                    }
                }
                div {
                    class: "voice-controls",
                    if listening() {
                        button {
                            class: "round-btn",
                            onclick: move |_| stop_listening(),
                            "■"
                        }
                    } else {
                        button {
                            class: "round-btn",
                            onclick: start_listening,
                            "🎤"
                        }
                    }
                    if !draft.read().trim().is_empty() {
                        button {
                            class: "round-btn primary",
                            disabled: is_streaming,
                            onclick: move |_| submit(),
                            "➤"
                        }
                    }
                }
                if is_streaming {
                    div {
                        class: "composer-status muted small",
                        span { class: "live-dot" }
                        "Thầy đang phản hồi..."
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "voice-composer",
            div {
                class: "voice-header",
                div {
                    class: "composer-badges",
                    span { class: "badge badge-outline", "{config.name}" }
                    span { class: "badge badge-secondary", "{scope_badge(config.scope)}" }
                }
                button {
                    class: "icon-btn",
                    title: "Chế độ giọng nói",
                    onclick: move |_| voice_mode.set(true),
                    "🎤"
                }
            }
            div {
                class: "composer-box",
                textarea {
                    class: "composer-input",
                    placeholder: "Nhập câu hỏi của bạn...",
                    value: "{draft}",
                    oninput: move |e: FormEvent| draft.set(e.value()),
                }
                div {
                    class: "composer-toolbar",
                    button {
                        class: "btn btn-primary",
                        disabled: is_streaming || draft.read().trim().is_empty(),
                        onclick: move |_| submit(),
                        "➤"
                    }
                }
            }
            if is_streaming {
                div {
                    class: "composer-status muted small",
                    span { class: "live-dot" }
                    "Thầy đang phản hồi..."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_map_onto_each_transcript() {
        assert_eq!(pick_transcript(0.0), MOCK_TRANSCRIPTS[0]);
        assert_eq!(pick_transcript(0.5), MOCK_TRANSCRIPTS[1]);
        assert_eq!(pick_transcript(0.99), MOCK_TRANSCRIPTS[2]);
    }

    #[test]
    fn out_of_range_samples_stay_in_bounds() {
        assert_eq!(pick_transcript(1.0), MOCK_TRANSCRIPTS[2]);
        assert_eq!(pick_transcript(-3.0), MOCK_TRANSCRIPTS[0]);
        assert_eq!(pick_transcript(f64::NAN), MOCK_TRANSCRIPTS[0]);
    }

    #[test]
    fn pending_recognition_slot_starts_empty() {
        let slot: Option<Task> = None;
        assert!(slot.is_none());
    }

    #[test]
    fn web_scopes_share_a_badge() {
        assert_eq!(scope_badge(Scope::Corpus), "Cơ sở dữ liệu");
        assert_eq!(scope_badge(Scope::WebL2), "Web");
    }
}

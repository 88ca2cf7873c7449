use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use hall_types::{Chat, Project};

use crate::mock_data::{mock_chats, mock_projects};

const PREVIEW_CHARS: usize = 80;

const KNOWLEDGE_SOURCES: [(&str, &str); 3] = [
    ("📖", "Kinh điển Phật giáo"),
    ("🗄", "Bài giảng HT Tuệ Sỹ"),
    ("📖", "Thiền học Việt Nam"),
];

const USER_MENU: [(&str, &str); 4] = [
    ("⬇", "Download mobile App"),
    ("⚙", "Settings"),
    ("☎", "Contact us"),
    ("⎋", "Log out"),
];

/// Chats whose title contains `query`, ignoring case. A blank query keeps all.
pub fn filter_chats<'a>(chats: &'a [Chat], query: &str) -> Vec<&'a Chat> {
    let needle = query.trim().to_lowercase();
    chats
        .iter()
        .filter(|chat| needle.is_empty() || chat.title.to_lowercase().contains(&needle))
        .collect()
}

/// Vietnamese "time ago" label.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "vừa xong".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} phút trước");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("khoảng {hours} giờ trước");
    }
    let days = elapsed.num_days();
    if days < 30 {
        return format!("{days} ngày trước");
    }
    format!("{} tháng trước", days / 30)
}

/// Opening of the last message in a chat, if any.
pub fn chat_preview(chat: &Chat) -> Option<String> {
    let last = chat.messages.last()?;
    let head: String = last.text.chars().take(PREVIEW_CHARS).collect();
    Some(format!("{head}..."))
}

fn project_count_label(project: &Project) -> String {
    format!("({} cuộc trò chuyện)", project.chat_ids.len())
}

/// Navigation column: brand, search, knowledge sources, projects, chats and
/// the user menu.
#[component]
pub fn LeftNav(width: i32, on_collapse: Callback<()>) -> Element {
    let now = use_hook(Utc::now);
    let chats = use_hook(move || mock_chats(now));
    let projects = use_hook(mock_projects);
    let mut query = use_signal(String::new);
    let mut user_menu_open = use_signal(|| false);

    let visible = filter_chats(&chats, &query.read());

    rsx! {
        nav {
            class: "left-nav",
            style: "width: {width}px;",
            div {
                class: "nav-header",
                div {
                    class: "nav-brand-row",
                    div {
                        class: "nav-brand",
                        div { class: "brand-mark", "ĐT" }
                        div {
                            h2 { class: "brand-title", "Đạo Tràng Ảo" }
                            p { class: "muted small", "Thỉnh pháp cùng Hòa Thượng Tuệ Sỹ" }
                        }
                    }
                    button {
                        class: "icon-btn",
                        title: "Thu gọn",
                        onclick: move |_| on_collapse.call(()),
                        "⇤"
                    }
                }
                button { class: "btn btn-primary btn-block", "+ Trò chuyện mới" }
                input {
                    class: "nav-search",
                    r#type: "search",
                    placeholder: "Tìm kiếm",
                    value: "{query}",
                    oninput: move |e: FormEvent| query.set(e.value()),
                }
            }

            div {
                class: "nav-scroll",
                section {
                    class: "nav-section",
                    div { class: "separator" }
                    h3 { class: "nav-section-title", "Kiến thức" }
                    for (icon, name) in KNOWLEDGE_SOURCES {
                        button {
                            key: "{name}",
                            class: "nav-item",
                            span { class: "nav-icon", "{icon}" }
                            "{name}"
                        }
                    }
                }

                section {
                    class: "nav-section",
                    div { class: "separator" }
                    h3 { class: "nav-section-title", "Dự án" }
                    for project in projects.iter() {
                        div {
                            key: "{project.id}",
                            class: "nav-row",
                            div { class: "nav-tile", "📁" }
                            div {
                                class: "nav-row-body",
                                div { class: "truncate strong", "{project.name}" }
                                div { class: "muted small", "{project_count_label(project)}" }
                            }
                            span { class: "muted", "›" }
                        }
                    }
                    button { class: "nav-item muted", "+ Dự án mới" }
                }

                section {
                    class: "nav-section",
                    div { class: "separator" }
                    h3 { class: "nav-section-title", "Các cuộc trò chuyện" }
                    if visible.is_empty() {
                        p { class: "muted small nav-empty", "Không tìm thấy cuộc trò chuyện" }
                    }
                    for chat in visible {
                        div {
                            key: "{chat.id}",
                            class: "nav-row",
                            div { class: "nav-avatar", "💬" }
                            div {
                                class: "nav-row-body",
                                div {
                                    class: "nav-chat-title",
                                    span { class: "truncate strong", "{chat.title}" }
                                    if chat.pinned {
                                        span { class: "muted", title: "Đã ghim", "📌" }
                                    }
                                }
                                div {
                                    class: "muted small nav-chat-meta",
                                    span { "🕒 {relative_time(chat.updated_at, now)}" }
                                    span { class: "badge badge-secondary", "{chat.messages.len()}" }
                                }
                                if let Some(preview) = chat_preview(chat) {
                                    p { class: "muted small clamp-2", "{preview}" }
                                }
                            }
                            button { class: "icon-btn", "⋯" }
                        }
                    }
                }
            }

            div {
                class: "nav-footer",
                if user_menu_open() {
                    div {
                        class: "user-menu",
                        for (icon, label) in USER_MENU {
                            button {
                                key: "{label}",
                                class: "nav-item muted",
                                span { class: "nav-icon", "{icon}" }
                                "{label}"
                            }
                        }
                        div { class: "separator" }
                    }
                }
                div {
                    class: "user-card",
                    onclick: move |_| user_menu_open.toggle(),
                    div { class: "user-avatar", "P" }
                    div {
                        class: "nav-row-body",
                        div { class: "strong", "Phúc Lê Vũ" }
                        div { class: "muted small", "Plus" }
                    }
                    span { class: "muted", if user_menu_open() { "▾" } else { "▴" } }
                }
            }
        }
    }
}

/// Collapsed navigation: a narrow icon rail.
#[component]
pub fn NavRail(width: i32, on_expand: Callback<()>) -> Element {
    rsx! {
        nav {
            class: "nav-rail",
            style: "width: {width}px;",
            button { class: "icon-btn", title: "Tạo cuộc trò chuyện mới", "+" }
            button {
                class: "icon-btn",
                title: "Tất cả cuộc trò chuyện",
                onclick: move |_| on_expand.call(()),
                "💬"
            }
            button { class: "icon-btn", title: "Dự án", "📁" }
            button { class: "icon-btn", title: "Dữ liệu", "🗄" }
            div { class: "flex-fill" }
            button { class: "icon-btn", title: "Cài đặt", "⚙" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn blank_query_keeps_every_chat() {
        let chats = mock_chats(now());
        assert_eq!(filter_chats(&chats, "").len(), 3);
        assert_eq!(filter_chats(&chats, "   ").len(), 3);
    }

    #[test]
    fn query_matches_title_ignoring_case() {
        let chats = mock_chats(now());
        let hits = filter_chats(&chats, "THIỀN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "chat_002");

        assert!(filter_chats(&chats, "không có").is_empty());
    }

    #[test]
    fn relative_time_buckets() {
        let now = now();
        assert_eq!(relative_time(now - Duration::seconds(20), now), "vừa xong");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 phút trước");
        assert_eq!(relative_time(now - Duration::hours(2), now), "khoảng 2 giờ trước");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 ngày trước");
        assert_eq!(relative_time(now + Duration::minutes(5), now), "vừa xong");
    }

    #[test]
    fn preview_is_cut_at_eighty_chars() {
        let chats = mock_chats(now());
        let preview = chat_preview(&chats[0]).unwrap();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn empty_chat_has_no_preview() {
        let mut chat = mock_chats(now()).remove(2);
        chat.messages.clear();
        assert_eq!(chat_preview(&chat), None);
    }
}

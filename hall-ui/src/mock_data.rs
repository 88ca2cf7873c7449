//! Canned corpus shown before any backend is wired in.

use chrono::{DateTime, Duration, Utc};
use hall_types::{
    AgentConfig, Attachment, AttachmentChart, AttachmentDoc, AttachmentTable, ChartPoint, Chat,
    Citation, DocKind, KnowledgeLevel, Message, MessageMetrics, Project, Role, Scope,
};

pub const DEFAULT_CHAT_TITLE: &str = "Tâm bất sanh bất diệt";

pub fn mock_citations() -> Vec<Citation> {
    vec![
        Citation {
            doc_id: "sutra_001".into(),
            title: "Kinh Kim Cương".into(),
            page: Some(15),
            ts: None,
            url: Some("/docs/kim-cuong-kinh.pdf".into()),
            quote: Some("Phàm sở hữu tướng, giai thị hư vọng...".into()),
        },
        Citation {
            doc_id: "tuesy_lecture_042".into(),
            title: "Bài giảng của HT Tuệ Sỹ về Thiền học".into(),
            page: None,
            ts: Some("00:15:30".into()),
            url: Some("/audio/tuesy-thien-hoc-042.mp3".into()),
            quote: Some("Thiền không phải là trạng thái vô tư...".into()),
        },
        Citation {
            doc_id: "vinaya_rules".into(),
            title: "Luật Tỳ Kheo".into(),
            page: Some(78),
            ts: None,
            url: Some("/docs/luat-ty-kheo.pdf".into()),
            quote: Some("Tứ Ba La Di pháp...".into()),
        },
    ]
}

pub fn default_agent() -> AgentConfig {
    AgentConfig {
        id: "tuesy_agent".into(),
        name: "Đại sư Tuệ Sỹ".into(),
        domains: vec!["Phật học".into(), "Thiền".into(), "Triết học".into()],
        knowledge_ids: vec![
            "tuesy_corpus".into(),
            "buddhist_sutras".into(),
            "zen_teachings".into(),
        ],
        temperature: 0.7,
        scope: Scope::Corpus,
        citations: true,
        knowledge_level: None,
    }
}

/// Agent the composer starts with.
pub fn session_agent() -> AgentConfig {
    AgentConfig {
        knowledge_ids: vec!["tuesy_corpus".into()],
        knowledge_level: Some(KnowledgeLevel::Basic),
        ..default_agent()
    }
}

pub fn mind_levels_chart() -> Attachment {
    Attachment::Chart(AttachmentChart {
        data: vec![
            point("Tâm ý thức", 30.0),
            point("Tâm A lại da", 70.0),
            point("Tâm Phật tính", 100.0),
        ],
        title: Some("Các tầng tâm thức trong Phật học".into()),
        chart_type: None,
    })
}

pub fn daily_practice_attachments() -> Vec<Attachment> {
    vec![
        Attachment::Doc(AttachmentDoc {
            kind: DocKind::Md,
            url: None,
            content: Some(
                "# Thiền môn nhật tụng\n\n## Công phu sáng\n- Tọa thiền 30 phút\n- Tụng Tâm Kinh 3 biến\n\n## Công phu chiều\n- Hành thiền 20 phút\n- Quán tưởng Phật hiệu"
                    .into(),
            ),
            title: Some("Thiền môn nhật tụng".into()),
        }),
        Attachment::Table(AttachmentTable {
            headers: vec!["Pháp môn".into(), "Thời gian".into(), "Mục đích".into()],
            rows: vec![
                row(["Tọa thiền", "30-60 phút", "An tâm định tĩnh"]),
                row(["Hành thiền", "15-30 phút", "Tu trong động"]),
                row(["Quán tưởng", "10-20 phút", "Tập trung tâm niệm"]),
            ],
            title: Some("Các pháp môn tu tập hàng ngày".into()),
        }),
    ]
}

pub fn standard_metrics() -> MessageMetrics {
    metrics(1200, 95)
}

pub fn mock_messages(now: DateTime<Utc>) -> Vec<Message> {
    let citations = mock_citations();

    let question = seed(
        "1",
        Role::User,
        "Xin Thầy giải thích về ý nghĩa của \"tâm bất sanh bất diệt\" trong Phật học?",
        now - Duration::seconds(300),
    );

    let mut answer = seed(
        "2",
        Role::Assistant,
        "Khái niệm \"tâm bất sanh bất diệt\" là một trong những giáo lý căn bản trong Phật học, đặc biệt trong Đại thừa Phật giáo. Theo lời dạy của các bậc Tổ sư, tâm thật sự của chúng ta - tức Phật tính - không có sanh diệt.\n\nĐây không có nghĩa là tâm của chúng ta bất động hay trơ lì, mà ngược lại, đó là bản chất linh động, tự nhiên của tâm thức. Như HT Tuệ Sỹ đã giảng: \"Tâm không sanh không diệt, nhưng vẫn có thể khởi tác dụng, vẫn có thể cảm thông với mọi hiện tượng.\"",
        now - Duration::seconds(240),
    );
    answer.citations = citations[..2].to_vec();
    answer.attachments = vec![mind_levels_chart()];
    answer.metrics = Some(standard_metrics());

    let follow_up = seed(
        "3",
        Role::User,
        "Thầy có thể cho con biết thêm về pháp môn Thiền không?",
        now - Duration::seconds(120),
    );

    let mut zen = seed(
        "4",
        Role::Assistant,
        "Thiền là con đường tu tập trực tiếp, không dựa vào ngôn từ văn tự mà hướng thẳng đến bản tâm. Trong truyền thống Thiền tông Việt Nam, đặc biệt qua lời dạy của các bậc Thiền sư như Trúc Lâm Tam Tổ, Thiền được hiểu là \"trực chỉ nhân tâm, kiến tánh thành Phật\".\n\nThiền không phải là ngồi yên lặng để tâm trống không, mà là giữ tâm tỉnh thức trong mọi hoạt động hàng ngày. Khi ta thật sự hiểu được Thiền, ta sẽ thấy rằng \"đi cũng Thiền, đứng cũng Thiền, nói cũng Thiền, im cũng Thiền\".",
        now - Duration::seconds(60),
    );
    zen.citations = citations;
    zen.attachments = daily_practice_attachments();
    zen.metrics = Some(metrics(980, 98));

    vec![question, answer, follow_up, zen]
}

pub fn mock_chats(now: DateTime<Utc>) -> Vec<Chat> {
    let messages = mock_messages(now);
    let agent = default_agent();

    vec![
        Chat {
            id: "chat_001".into(),
            title: DEFAULT_CHAT_TITLE.into(),
            project_id: None,
            messages: messages.clone(),
            agent: agent.clone(),
            updated_at: now - Duration::seconds(60),
            pinned: true,
        },
        Chat {
            id: "chat_002".into(),
            title: "Thiền và đời sống hàng ngày".into(),
            project_id: None,
            messages: messages[..2].to_vec(),
            agent: agent.clone(),
            updated_at: now - Duration::hours(1),
            pinned: false,
        },
        Chat {
            id: "chat_003".into(),
            title: "Giới luật trong Phật giáo".into(),
            project_id: None,
            messages: messages[..1].to_vec(),
            agent,
            updated_at: now - Duration::hours(2),
            pinned: false,
        },
    ]
}

pub fn mock_projects() -> Vec<Project> {
    vec![
        Project {
            id: "project_001".into(),
            name: "Nghiên cứu Thiền học".into(),
            description: Some("Tập hợp các cuộc thảo luận về Thiền học theo HT Tuệ Sỹ".into()),
            chat_ids: vec!["chat_001".into(), "chat_002".into()],
        },
        Project {
            id: "project_002".into(),
            name: "Giới luật Phật giáo".into(),
            description: Some("Tìm hiểu về các quy tắc tu tập trong Phật giáo".into()),
            chat_ids: vec!["chat_003".into()],
        },
    ]
}

fn seed(id: &str, role: Role, text: &str, created_at: DateTime<Utc>) -> Message {
    Message {
        id: id.into(),
        ..Message::new(role, text, created_at)
    }
}

fn point(name: &str, value: f64) -> ChartPoint {
    ChartPoint {
        name: name.into(),
        value,
    }
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

fn metrics(latency_ms: u32, verifier: u8) -> MessageMetrics {
    MessageMetrics {
        latency_ms: Some(latency_ms),
        model: Some("gpt-4o-mini".into()),
        verifier: Some(verifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_conversation_shape() {
        let messages = mock_messages(Utc::now());
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].citations.len(), 2);
        assert_eq!(messages[3].citations.len(), 3);
        assert_eq!(messages[3].attachments.len(), 2);
        assert!(messages.windows(2).all(|w| w[0].created_at < w[1].created_at));
    }

    #[test]
    fn projects_reference_existing_chats() {
        let chats = mock_chats(Utc::now());
        for project in mock_projects() {
            for chat_id in &project.chat_ids {
                assert!(chats.iter().any(|chat| &chat.id == chat_id));
            }
        }
    }
}

//! Streamed assistant replies
//!
//! A [`ResponseSource`] turns a prompt into a lazy stream of
//! [`StreamEvent`]s. [`drive_turn`] consumes that stream and folds it into
//! conversation updates, always finishing with exactly one terminal update.

use std::rc::Rc;

use futures_util::stream::{self, LocalBoxStream, Stream, StreamExt};
use gloo_net::eventsource::futures::EventSource;
use gloo_timers::future::TimeoutFuture;
use hall_types::{AgentConfig, StreamEvent};
use thiserror::Error;
use url::Url;

use crate::config::HallConfig;
use crate::hall::conversation::{Enrichment, TurnUpdate};
use crate::mock_data::{daily_practice_attachments, mock_citations, standard_metrics};

pub type EventStream = LocalBoxStream<'static, Result<StreamEvent, StreamError>>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StreamError {
    #[error("stream transport failed: {0}")]
    Transport(String),
    #[error("producer reported an error: {0}")]
    Remote(String),
    #[error("malformed stream event: {0}")]
    Decode(String),
}

pub trait ResponseSource {
    /// Start a reply to `text`. The stream is finite and cannot be restarted;
    /// dropping it stops the producer.
    fn open(&self, text: &str, agent: &AgentConfig) -> EventStream;
}

/// Pick the source configured for this page.
pub fn response_source(config: &HallConfig) -> Rc<dyn ResponseSource> {
    match &config.stream_url {
        Some(url) => Rc::new(EventSourceResponseSource::new(url.clone())),
        None => Rc::new(MockResponseSource),
    }
}

/// Feed `events` into `on_update` until the reply ends.
///
/// `on_update` receives the chunks in order followed by either
/// [`TurnUpdate::Complete`] or [`TurnUpdate::Fail`]. Exhausting the stream
/// without `done` completes the turn without enrichment.
pub async fn drive_turn<S, F>(mut events: S, mut on_update: F) -> Result<(), StreamError>
where
    S: Stream<Item = Result<StreamEvent, StreamError>> + Unpin,
    F: FnMut(TurnUpdate),
{
    match pump(&mut events, &mut on_update).await {
        Ok(enrichment) => {
            on_update(TurnUpdate::Complete(enrichment));
            Ok(())
        }
        Err(e) => {
            on_update(TurnUpdate::Fail);
            Err(e)
        }
    }
}

async fn pump<S, F>(events: &mut S, on_update: &mut F) -> Result<Enrichment, StreamError>
where
    S: Stream<Item = Result<StreamEvent, StreamError>> + Unpin,
    F: FnMut(TurnUpdate),
{
    while let Some(event) = events.next().await {
        match event? {
            StreamEvent::Chunk { text } => on_update(TurnUpdate::Chunk(text)),
            StreamEvent::Done {
                citations,
                attachments,
                metrics,
            } => {
                return Ok(Enrichment {
                    citations,
                    attachments,
                    metrics,
                })
            }
            StreamEvent::Error { message } => return Err(StreamError::Remote(message)),
        }
    }
    Ok(Enrichment::default())
}

// ============================================================================
// Mock source
// ============================================================================

const MOCK_INITIAL_DELAY_MS: u32 = 300;
const MOCK_MIN_CHUNK_DELAY_MS: u32 = 80;
const MOCK_CHUNK_JITTER_MS: f64 = 120.0;

const MOCK_CHUNKS: [&str; 9] = [
    "Đây là một câu hỏi rất hay về Phật học. ",
    "Theo lời dạy của các bậc Tổ sư, ",
    "chúng ta có thể hiểu rằng ",
    "tâm thức có nhiều tầng khác nhau. ",
    "\n\nTrong Duy thức học, ",
    "người ta phân chia tâm thức thành 8 thức: ",
    "nhãn thức, nhĩ thức, tỷ thức, thiệt thức, thân thức, ý thức, mạt na thức và a lại da thức. ",
    "\n\nMỗi thức có chức năng riêng ",
    "và cùng nhau tạo nên trải nghiệm hoàn chỉnh của con người.",
];

/// Canned reply with timer-driven pacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResponseSource;

/// Delay before a chunk for a uniform sample `r` in `[0, 1)`.
pub fn mock_chunk_delay_ms(r: f64) -> u32 {
    MOCK_MIN_CHUNK_DELAY_MS + (r.clamp(0.0, 1.0) * MOCK_CHUNK_JITTER_MS) as u32
}

/// The events of the canned reply, without pacing.
pub fn mock_reply() -> Vec<StreamEvent> {
    let mut events: Vec<StreamEvent> = MOCK_CHUNKS
        .iter()
        .map(|text| StreamEvent::Chunk {
            text: text.to_string(),
        })
        .collect();
    events.push(StreamEvent::Done {
        citations: mock_citations().into_iter().take(2).collect(),
        attachments: daily_practice_attachments(),
        metrics: Some(standard_metrics()),
    });
    events
}

impl ResponseSource for MockResponseSource {
    fn open(&self, _text: &str, _agent: &AgentConfig) -> EventStream {
        let events = mock_reply();
        stream::unfold((events.into_iter(), true), |(mut events, first)| async move {
            let event = events.next()?;
            if first {
                TimeoutFuture::new(MOCK_INITIAL_DELAY_MS).await;
            }
            if matches!(event, StreamEvent::Chunk { .. }) {
                TimeoutFuture::new(mock_chunk_delay_ms(js_sys::Math::random())).await;
            }
            Some((Ok(event), (events, false)))
        })
        .boxed_local()
    }
}

// ============================================================================
// Server-Sent Events source
// ============================================================================

/// Replies streamed from an SSE endpoint whose `message` events carry JSON
/// [`StreamEvent`]s. The prompt and agent settings travel as query parameters.
#[derive(Debug, Clone)]
pub struct EventSourceResponseSource {
    endpoint: String,
}

impl EventSourceResponseSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

pub fn stream_request_url(
    endpoint: &str,
    text: &str,
    agent: &AgentConfig,
) -> Result<String, StreamError> {
    let mut url = Url::parse(endpoint).map_err(|e| StreamError::Transport(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("message", text)
        .append_pair("agent", &agent.id)
        .append_pair("scope", agent.scope.as_str())
        .append_pair("temperature", &format!("{:.1}", agent.temperature))
        .append_pair("citations", if agent.citations { "true" } else { "false" });
    if let Some(level) = agent.knowledge_level {
        url.query_pairs_mut().append_pair("knowledgeLevel", level.as_str());
    }
    Ok(url.into())
}

pub fn decode_event(data: Option<String>) -> Result<StreamEvent, StreamError> {
    let data = data.ok_or_else(|| StreamError::Decode("non-text message".to_string()))?;
    serde_json::from_str(&data).map_err(|e| StreamError::Decode(e.to_string()))
}

impl ResponseSource for EventSourceResponseSource {
    fn open(&self, text: &str, agent: &AgentConfig) -> EventStream {
        let url = match stream_request_url(&self.endpoint, text, agent) {
            Ok(url) => url,
            Err(e) => return stream::once(async move { Err(e) }).boxed_local(),
        };

        let mut source = match EventSource::new(&url) {
            Ok(source) => source,
            Err(e) => {
                let e = StreamError::Transport(e.to_string());
                return stream::once(async move { Err(e) }).boxed_local();
            }
        };
        let subscription = match source.subscribe("message") {
            Ok(subscription) => subscription,
            Err(e) => {
                let e = StreamError::Transport(e.to_string());
                return stream::once(async move { Err(e) }).boxed_local();
            }
        };

        let events: EventStream = subscription
            .map(|item| match item {
                Ok((_, message)) => decode_event(message.data().as_string()),
                Err(e) => Err(StreamError::Transport(e.to_string())),
            })
            .boxed_local();

        // The EventSource rides along with its subscription so dropping the
        // stream closes the connection. The browser reconnects on its own
        // after the server hangs up, so the stream ends at the first terminal
        // event instead of waiting for the socket.
        stream::unfold(
            (source, events, false),
            |(source, mut events, finished)| async move {
                if finished {
                    return None;
                }
                let item = events.next().await?;
                let terminal = !matches!(item, Ok(StreamEvent::Chunk { .. }));
                Some((item, (source, events, terminal)))
            },
        )
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use hall_types::{Citation, Scope};

    /// Replays a fixed script of events.
    struct ScriptedSource {
        script: Vec<Result<StreamEvent, StreamError>>,
    }

    impl ResponseSource for ScriptedSource {
        fn open(&self, _text: &str, _agent: &AgentConfig) -> EventStream {
            stream::iter(self.script.clone()).boxed_local()
        }
    }

    fn chunk(text: &str) -> Result<StreamEvent, StreamError> {
        Ok(StreamEvent::Chunk {
            text: text.to_string(),
        })
    }

    fn run(script: Vec<Result<StreamEvent, StreamError>>) -> (Vec<TurnUpdate>, Result<(), StreamError>) {
        let source = ScriptedSource { script };
        let agent = crate::mock_data::default_agent();
        let mut updates = Vec::new();
        let result = block_on(drive_turn(source.open("q", &agent), |u| updates.push(u)));
        (updates, result)
    }

    #[test]
    fn chunks_then_done_complete_with_enrichment() {
        let citation = Citation {
            doc_id: "sutra_001".into(),
            title: "Kinh Kim Cương".into(),
            page: Some(15),
            ts: None,
            url: None,
            quote: None,
        };
        let (updates, result) = run(vec![
            chunk("a"),
            chunk("b"),
            Ok(StreamEvent::Done {
                citations: vec![citation.clone()],
                attachments: vec![],
                metrics: None,
            }),
            chunk("ignored after done"),
        ]);

        assert_eq!(result, Ok(()));
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0], TurnUpdate::Chunk("a".into()));
        assert_eq!(updates[1], TurnUpdate::Chunk("b".into()));
        match &updates[2] {
            TurnUpdate::Complete(enrichment) => assert_eq!(enrichment.citations, vec![citation]),
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn exhaustion_without_done_completes_plainly() {
        let (updates, result) = run(vec![chunk("only")]);
        assert_eq!(result, Ok(()));
        assert_eq!(
            updates.last(),
            Some(&TurnUpdate::Complete(Enrichment::default()))
        );
    }

    #[test]
    fn error_event_fails_the_turn() {
        let (updates, result) = run(vec![
            chunk("partial"),
            Ok(StreamEvent::Error {
                message: "model overloaded".into(),
            }),
        ]);
        assert_eq!(result, Err(StreamError::Remote("model overloaded".into())));
        assert_eq!(updates.last(), Some(&TurnUpdate::Fail));
    }

    #[test]
    fn transport_error_fails_the_turn() {
        let (updates, result) = run(vec![Err(StreamError::Transport("reset".into()))]);
        assert!(matches!(result, Err(StreamError::Transport(_))));
        assert_eq!(updates, vec![TurnUpdate::Fail]);
    }

    #[test]
    fn turn_updates_drive_conversation() {
        use crate::hall::conversation::{Conversation, FAILURE_TEXT};

        let mut conversation = Conversation::default();
        let id = conversation.begin_turn("q", chrono::Utc::now());
        let source = ScriptedSource {
            script: vec![chunk("x"), Err(StreamError::Decode("bad".into()))],
        };
        let agent = crate::mock_data::default_agent();
        let result = block_on(drive_turn(source.open("q", &agent), |u| {
            conversation.apply(&id, u)
        }));

        assert!(result.is_err());
        assert!(!conversation.is_streaming());
        assert_eq!(conversation.message(&id).unwrap().text, FAILURE_TEXT);
    }

    #[test]
    fn mock_reply_shape() {
        let events = mock_reply();
        assert_eq!(events.len(), 10);
        let text: String = events
            .iter()
            .filter_map(|e| match e {
                StreamEvent::Chunk { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(text.starts_with("Đây là một câu hỏi rất hay"));
        assert!(text.ends_with("của con người."));

        match events.last() {
            Some(StreamEvent::Done {
                citations,
                attachments,
                metrics,
            }) => {
                assert_eq!(citations.len(), 2);
                assert_eq!(attachments.len(), 2);
                assert_eq!(metrics.as_ref().and_then(|m| m.latency_ms), Some(1200));
            }
            other => panic!("expected done, got {other:?}"),
        }
    }

    #[test]
    fn mock_delay_bounds() {
        assert_eq!(mock_chunk_delay_ms(0.0), 80);
        assert_eq!(mock_chunk_delay_ms(0.5), 140);
        assert!(mock_chunk_delay_ms(0.9999) < 200);
        assert_eq!(mock_chunk_delay_ms(7.0), 200);
    }

    #[test]
    fn request_url_carries_prompt_and_agent() {
        let mut agent = crate::mock_data::session_agent();
        agent.scope = Scope::WebL1;
        let url = stream_request_url("http://localhost:9000/sse", "Thiền là gì?", &agent).unwrap();
        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("message".into(), "Thiền là gì?".into())));
        assert!(pairs.contains(&("scope".into(), "web-l1".into())));
        assert!(pairs.contains(&("temperature".into(), "0.7".into())));
        assert!(pairs.contains(&("knowledgeLevel".into(), "basic".into())));

        assert!(matches!(
            stream_request_url("/relative", "q", &agent),
            Err(StreamError::Transport(_))
        ));
    }

    #[test]
    fn decode_event_reports_bad_payloads() {
        assert_eq!(
            decode_event(Some(r#"{"type":"chunk","text":"hi"}"#.into())),
            Ok(StreamEvent::Chunk { text: "hi".into() })
        );
        assert!(matches!(
            decode_event(Some("{}".into())),
            Err(StreamError::Decode(_))
        ));
        assert!(matches!(decode_event(None), Err(StreamError::Decode(_))));
    }
}

use std::sync::OnceLock;

use url::Url;

/// Page-level settings taken from the URL query.
///
/// - `?stream=/api/stream` streams replies over Server-Sent Events from that
///   endpoint (resolved against the page URL); without it replies are mocked.
/// - `?agent=<id>` overrides the id of the default agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HallConfig {
    pub stream_url: Option<String>,
    pub agent_id: Option<String>,
}

impl HallConfig {
    pub fn from_href(href: &str) -> Self {
        let Ok(page) = Url::parse(href) else {
            return Self::default();
        };

        let mut config = Self::default();
        for (key, value) in page.query_pairs() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "stream" => {
                    config.stream_url = page.join(value).ok().map(String::from);
                }
                "agent" => config.agent_id = Some(value.to_string()),
                _ => {}
            }
        }
        config
    }
}

fn read_config() -> HallConfig {
    let href = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    HallConfig::from_href(&href)
}

static HALL_CONFIG: OnceLock<HallConfig> = OnceLock::new();

pub fn hall_config() -> &'static HallConfig {
    HALL_CONFIG.get_or_init(read_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_query_means_mock_source() {
        let config = HallConfig::from_href("http://localhost:8080/");
        assert_eq!(config, HallConfig::default());
    }

    #[test]
    fn relative_stream_url_resolves_against_page() {
        let config = HallConfig::from_href("https://hall.example/chat?stream=/api/stream&agent=tuesy_v2");
        assert_eq!(
            config.stream_url.as_deref(),
            Some("https://hall.example/api/stream")
        );
        assert_eq!(config.agent_id.as_deref(), Some("tuesy_v2"));
    }

    #[test]
    fn absolute_stream_url_is_kept() {
        let config = HallConfig::from_href(
            "http://localhost:8080/?stream=http%3A%2F%2Flocalhost%3A9000%2Fsse",
        );
        assert_eq!(config.stream_url.as_deref(), Some("http://localhost:9000/sse"));
    }

    #[test]
    fn blank_values_and_bad_hrefs_are_ignored() {
        assert_eq!(
            HallConfig::from_href("http://localhost/?stream=&agent=%20"),
            HallConfig::default()
        );
        assert_eq!(HallConfig::from_href("not a url"), HallConfig::default());
    }
}

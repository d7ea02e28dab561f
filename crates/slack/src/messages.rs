use govpulse_core::config::ResponseMode;
use serde::Serialize;

/// Default ceiling for one Slack message, a little under the hard 4000-char
/// API limit to leave room for the code-fence wrapper.
pub const DEFAULT_MESSAGE_LIMIT: usize = 3800;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Ephemeral,
    InChannel,
}

impl From<ResponseMode> for ResponseType {
    fn from(mode: ResponseMode) -> Self {
        match mode {
            ResponseMode::Ephemeral => Self::Ephemeral,
            ResponseMode::InChannel => Self::InChannel,
        }
    }
}

/// The `{response_type, text}` body Slack expects back from a slash command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlackResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl SlackResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self { response_type: ResponseType::Ephemeral, text: text.into() }
    }

    pub fn with_mode(mode: ResponseMode, text: impl Into<String>) -> Self {
        Self { response_type: mode.into(), text: text.into() }
    }
}

pub fn usage_message() -> SlackResponse {
    SlackResponse::ephemeral(
        "🏥 *Atlan Professional Health Check*\n\n\
         📋 *Usage:*\n\
         `/atlan-health \"Company Name\" https://tenant.atlan.com industry:construction tags:Safety,OSHA`\n\n\
         🎯 *Industries:* finance, healthcare, construction, retail, technology, manufacturing\n\
         🔍 *Filters:* tags, connections, certificate, asset_type",
    )
}

pub fn parse_failure_message() -> SlackResponse {
    SlackResponse::ephemeral(
        "❌ Could not parse command. Please include a company name and Atlan tenant URL.",
    )
}

pub fn error_message(user_message: &str, correlation_id: &str) -> SlackResponse {
    SlackResponse::ephemeral(format!(
        "❌ *Error*: {user_message}\n\nReference: {correlation_id}"
    ))
}

/// Split `text` into chunks no longer than `limit` bytes, preferring line
/// boundaries. A single line longer than the limit is hard-split on char
/// boundaries. Always returns at least one chunk.
pub fn chunk_text(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        if line.len() > limit {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            for piece in hard_split(line, limit) {
                chunks.push(piece);
            }
            continue;
        }

        let needed =
            if current.is_empty() { line.len() } else { current.len() + 1 + line.len() };
        if needed > limit {
            chunks.push(std::mem::take(&mut current));
            current.push_str(line);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn hard_split(line: &str, limit: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if current.len() + ch.len_utf8() > limit {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use govpulse_core::config::ResponseMode;

    use super::{chunk_text, usage_message, ResponseType, SlackResponse};

    #[test]
    fn response_serializes_to_slack_shape() {
        let response = SlackResponse::with_mode(ResponseMode::InChannel, "hello");
        let json = serde_json::to_value(&response).expect("serialize");

        assert_eq!(json["response_type"], "in_channel");
        assert_eq!(json["text"], "hello");
    }

    #[test]
    fn usage_message_is_ephemeral_and_mentions_all_industries() {
        let message = usage_message();
        assert_eq!(message.response_type, ResponseType::Ephemeral);
        for industry in ["finance", "healthcare", "construction", "retail", "technology", "manufacturing"]
        {
            assert!(message.text.contains(industry), "usage should mention {industry}");
        }
    }

    #[test]
    fn short_text_stays_in_one_chunk() {
        let chunks = chunk_text("one\ntwo\nthree", 100);
        assert_eq!(chunks, vec!["one\ntwo\nthree".to_string()]);
    }

    #[test]
    fn chunks_never_exceed_the_limit() {
        let text = (0..200).map(|i| format!("line number {i}")).collect::<Vec<_>>().join("\n");
        let chunks = chunk_text(&text, 120);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.len() <= 120, "chunk of {} bytes exceeds limit", chunk.len());
        }
        assert_eq!(chunks.join("\n"), text, "chunking must not lose content");
    }

    #[test]
    fn oversized_single_line_is_hard_split_on_char_boundaries() {
        let text = "é".repeat(100);
        let chunks = chunk_text(&text, 15);

        for chunk in &chunks {
            assert!(chunk.len() <= 15);
        }
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn empty_text_yields_a_single_empty_chunk() {
        assert_eq!(chunk_text("", 100), vec![String::new()]);
    }
}

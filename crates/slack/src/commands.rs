use std::collections::BTreeMap;

use serde::Deserialize;

/// Host suffix a tenant URL must carry to be picked up from command text.
pub const TENANT_DOMAIN_SUFFIX: &str = ".atlan.com";

/// Form fields Slack posts for a slash command. Unknown fields (token,
/// api_app_id, ...) are ignored during decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SlashCommandPayload {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub response_url: String,
    #[serde(default)]
    pub trigger_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl FilterValue {
    /// First element for list values, the value itself otherwise.
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Many(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn as_list(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub company_name: String,
    pub tenant_url: Option<String>,
    pub filters: BTreeMap<String, FilterValue>,
}

impl ParsedCommand {
    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    pub fn industry_hint(&self) -> Option<&str> {
        self.filter("industry").map(FilterValue::first)
    }
}

/// Parse `/atlan-health` command text into its parts. Returns `None` for
/// blank input so the caller can answer with the usage hint.
///
/// Grammar: `"Company Name" https://tenant.atlan.com key:value key:a,b ...`
/// The quotes are optional; without them the first whitespace token is the
/// company name. An unterminated quote degrades to first-token splitting.
pub fn parse_health_command(text: &str) -> Option<ParsedCommand> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (company_name, rest) = split_company_name(trimmed);

    let mut tenant_url = None;
    let mut filters = BTreeMap::new();

    for token in rest.split_whitespace() {
        if tenant_url.is_none() && is_tenant_url(token) {
            tenant_url = Some(token.to_string());
            continue;
        }

        if let Some((key, value)) = parse_filter_token(token) {
            filters.insert(key, value);
        }
    }

    Some(ParsedCommand { company_name, tenant_url, filters })
}

fn split_company_name(text: &str) -> (String, &str) {
    if let Some(quoted) = text.strip_prefix('"') {
        if let Some(end) = quoted.find('"') {
            let company = quoted[..end].trim();
            if !company.is_empty() {
                return (company.to_string(), &quoted[end + 1..]);
            }
        }
    }

    // No quote, or the quote never closed: take the first token.
    let mut parts = text.splitn(2, char::is_whitespace);
    let company = parts.next().unwrap_or_default();
    (company.to_string(), parts.next().unwrap_or_default())
}

fn is_tenant_url(token: &str) -> bool {
    let Some(remainder) =
        token.strip_prefix("https://").or_else(|| token.strip_prefix("http://"))
    else {
        return false;
    };

    let host = remainder.split('/').next().unwrap_or_default();
    host.len() > TENANT_DOMAIN_SUFFIX.len() && host.ends_with(TENANT_DOMAIN_SUFFIX)
}

fn parse_filter_token(token: &str) -> Option<(String, FilterValue)> {
    let (key, raw_value) = token.split_once(':')?;

    if key.is_empty() || !key.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
        return None;
    }
    if raw_value.is_empty()
        || !raw_value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | ',' | '.' | '-'))
    {
        return None;
    }

    let value = if raw_value.contains(',') {
        FilterValue::Many(
            raw_value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )
    } else {
        FilterValue::Single(raw_value.to_string())
    };

    Some((key.to_ascii_lowercase(), value))
}

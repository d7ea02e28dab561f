//! Slack boundary for govpulse:
//! - **Slash Commands** (`commands`) - `/atlan-health "Company" https://tenant.atlan.com ...`
//! - **Signatures** (`signature`) - HMAC-SHA256 request verification
//! - **Messages** (`messages`) - response envelopes and chunking under the
//!   Slack message ceiling
//!
//! # Getting Started
//!
//! 1. Create a Slack app at https://api.slack.com/apps
//! 2. Add a slash command pointing at `POST /slack/atlan-setup`
//! 3. Set `GOVPULSE_SLACK_SIGNING_SECRET` from Basic Information > Signing Secret
//!
//! # Key Types
//!
//! - `SlashCommandPayload` - the form fields Slack posts
//! - `ParsedCommand` - company name, tenant URL, filter map
//! - `SignatureVerifier` - timestamp window + constant-time HMAC check
//! - `SlackResponse` - `{response_type, text}` reply body

pub mod commands;
pub mod messages;
pub mod signature;

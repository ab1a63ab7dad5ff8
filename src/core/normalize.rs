//! Webhook payload normalization.
//!
//! Maps a raw push or pull-request payload into an [`EventRecord`]. Payloads
//! matching neither shape are rejected; recognized shapes with missing nested
//! fields fail with the offending field path instead of panicking.

use crate::core::events::EventRecord;
use chrono::{NaiveDateTime, Utc};
use serde_json::Value;

/// Strict timestamp format for `pull_request.created_at` (UTC, no fractional
/// seconds).
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Errors that can occur while normalizing a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Payload matches neither the push nor the pull-request shape.
    #[error("Unsupported event")]
    UnsupportedEvent,
    /// Recognized shape, but a required nested field is missing or mis-typed.
    #[error("missing or invalid field '{0}'")]
    MissingField(&'static str),
    /// `created_at` does not match the strict wire format.
    #[error("invalid timestamp '{value}': expected YYYY-MM-DDTHH:MM:SSZ")]
    InvalidTimestamp { value: String },
}

/// Result type for normalization.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Normalizes a decoded webhook payload into one [`EventRecord`].
///
/// # Errors
/// Returns [`NormalizeError::UnsupportedEvent`] for unrecognized shapes and
/// [`NormalizeError::MissingField`] / [`NormalizeError::InvalidTimestamp`]
/// for recognized shapes with bad contents.
pub fn normalize(payload: &Value) -> Result<EventRecord> {
    if payload.get("pusher").is_some() {
        normalize_push(payload)
    } else if payload.get("pull_request").is_some() {
        normalize_pull_request(payload)
    } else {
        Err(NormalizeError::UnsupportedEvent)
    }
}

fn normalize_push(payload: &Value) -> Result<EventRecord> {
    let author = str_field(payload, "pusher.name")?;
    let git_ref = str_field(payload, "ref")?;
    let request_id = str_field(payload, "head_commit.id")?;

    // `ref` arrives as `refs/heads/<branch>`; the branch is the final segment.
    let to_branch = git_ref.rsplit('/').next().unwrap_or(git_ref);

    // Push payloads deliberately take the processing time, not a payload
    // field; pull requests use the payload's `created_at` instead.
    Ok(EventRecord::push(request_id, author, to_branch, Utc::now()))
}

fn normalize_pull_request(payload: &Value) -> Result<EventRecord> {
    let author = str_field(payload, "pull_request.user.login")?;
    let from_branch = str_field(payload, "pull_request.head.ref")?;
    let to_branch = str_field(payload, "pull_request.base.ref")?;
    let created_at = str_field(payload, "pull_request.created_at")?;
    let id = lookup(payload, "pull_request.id")
        .and_then(Value::as_i64)
        .ok_or(NormalizeError::MissingField("pull_request.id"))?;

    let timestamp = NaiveDateTime::parse_from_str(created_at, CREATED_AT_FORMAT)
        .map_err(|_| NormalizeError::InvalidTimestamp {
            value: created_at.to_string(),
        })?
        .and_utc();

    Ok(EventRecord::pull_request(
        id.to_string(),
        author,
        from_branch,
        to_branch,
        timestamp,
    ))
}

/// Walks a `.`-separated path into nested JSON objects.
fn lookup<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(payload, |value, key| value.get(key))
}

fn str_field<'a>(payload: &'a Value, path: &'static str) -> Result<&'a str> {
    lookup(payload, path)
        .and_then(Value::as_str)
        .ok_or(NormalizeError::MissingField(path))
}

//! Event record definitions.
//!
//! Every webhook delivery is normalized into an `EventRecord` before it is
//! stored. Records are immutable, append-only, and never evicted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel branch value for events that have no source branch.
pub const NO_BRANCH: &str = "N/A";

/// Kind of repository event a record was normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventAction {
    /// Commits were appended to a branch.
    Push,
    /// A pull request was opened.
    PullRequest,
    /// Catch-all for action values this version does not recognize.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push => write!(f, "PUSH"),
            Self::PullRequest => write!(f, "PULL_REQUEST"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Normalized repository event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Source identifier: commit SHA for pushes, pull request id otherwise.
    /// Unique per source event, but not enforced unique by the store.
    pub request_id: String,
    /// Actor that triggered the event.
    pub author: String,
    /// Kind of event.
    pub action: EventAction,
    /// Source branch; `"N/A"` when the event has none.
    pub from_branch: String,
    /// Target branch.
    pub to_branch: String,
    /// When the event occurred, UTC.
    pub timestamp: DateTime<Utc>,
}

impl EventRecord {
    /// Creates a push record. Pushes carry no source branch.
    #[must_use]
    pub fn push(
        request_id: impl Into<String>,
        author: impl Into<String>,
        to_branch: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            author: author.into(),
            action: EventAction::Push,
            from_branch: NO_BRANCH.to_string(),
            to_branch: to_branch.into(),
            timestamp,
        }
    }

    /// Creates a pull-request record.
    #[must_use]
    pub fn pull_request(
        request_id: impl Into<String>,
        author: impl Into<String>,
        from_branch: impl Into<String>,
        to_branch: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            author: author.into(),
            action: EventAction::PullRequest,
            from_branch: from_branch.into(),
            to_branch: to_branch.into(),
            timestamp,
        }
    }
}

/// The two hardcoded records appended by the `/test-data` seed endpoint,
/// both timestamped at the moment of the call.
#[must_use]
pub fn sample_records() -> Vec<EventRecord> {
    let now = Utc::now();
    vec![
        EventRecord::push("test123", "john_doe", "main", now),
        EventRecord::pull_request("test456", "jane_smith", "feature-auth", "main", now),
    ]
}

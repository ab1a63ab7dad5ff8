//! Read-side event formatting.
//!
//! Turns a store snapshot into the display strings served to the polling
//! page: most recent first, capped at [`DISPLAY_LIMIT`].

use crate::core::events::{EventAction, EventRecord};

/// Maximum number of entries the read side ever returns.
pub const DISPLAY_LIMIT: usize = 10;

/// Display timestamp format, e.g. `04 June 2021 - 02:15 PM UTC`.
const DISPLAY_TIME_FORMAT: &str = "%d %B %Y - %I:%M %p UTC";

/// Formats a snapshot of records for display.
///
/// Pure function of its input: sorts descending by timestamp (stable, so
/// ties keep insertion order), truncates to [`DISPLAY_LIMIT`], and renders
/// one message per record.
#[must_use]
pub fn format_events(mut records: Vec<EventRecord>) -> Vec<String> {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records.truncate(DISPLAY_LIMIT);
    records.iter().map(display_message).collect()
}

fn display_message(record: &EventRecord) -> String {
    let time = record.timestamp.format(DISPLAY_TIME_FORMAT);
    match record.action {
        EventAction::Push => {
            format!("{} pushed to {} on {}", record.author, record.to_branch, time)
        }
        EventAction::PullRequest => format!(
            "{} submitted a pull request from {} to {} on {}",
            record.author, record.from_branch, record.to_branch, time
        ),
        // Unreachable through the normalizer; kept so records with actions
        // from a newer version still render.
        other => format!("{} performed {}", record.author, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 6, 4, hour, minute, 0).unwrap()
    }

    #[test]
    fn push_message_template() {
        let record = EventRecord::push("abc123", "alice", "main", at(14, 15));
        assert_eq!(
            format_events(vec![record]),
            vec!["alice pushed to main on 04 June 2021 - 02:15 PM UTC"]
        );
    }

    #[test]
    fn pull_request_message_template() {
        let record = EventRecord::pull_request("42", "bob", "feat", "main", at(14, 15));
        assert_eq!(
            format_events(vec![record]),
            vec!["bob submitted a pull request from feat to main on 04 June 2021 - 02:15 PM UTC"]
        );
    }

    #[test]
    fn unknown_action_falls_back_to_performed() {
        let mut record = EventRecord::push("x", "carol", "main", at(9, 0));
        record.action = EventAction::Unknown;
        assert_eq!(format_events(vec![record]), vec!["carol performed UNKNOWN"]);
    }

    #[test]
    fn morning_times_render_am() {
        let record = EventRecord::push("x", "alice", "main", at(2, 5));
        assert_eq!(
            format_events(vec![record]),
            vec!["alice pushed to main on 04 June 2021 - 02:05 AM UTC"]
        );
    }

    #[test]
    fn most_recent_first() {
        let records = vec![
            EventRecord::push("a", "alice", "main", at(9, 0)),
            EventRecord::push("b", "bob", "main", at(11, 0)),
            EventRecord::push("c", "carol", "main", at(10, 0)),
        ];
        let messages = format_events(records);
        assert!(messages[0].starts_with("bob"));
        assert!(messages[1].starts_with("carol"));
        assert!(messages[2].starts_with("alice"));
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let records = vec![
            EventRecord::push("a", "first", "main", at(9, 0)),
            EventRecord::push("b", "second", "main", at(9, 0)),
        ];
        let messages = format_events(records);
        assert!(messages[0].starts_with("first"));
        assert!(messages[1].starts_with("second"));
    }

    #[test]
    fn output_caps_at_display_limit() {
        let records = (0u32..25)
            .map(|i| EventRecord::push(format!("sha{i}"), "alice", "main", at(i % 24, 0)))
            .collect();
        assert_eq!(format_events(records).len(), DISPLAY_LIMIT);
    }

    proptest! {
        #[test]
        fn formats_min_of_n_and_limit(timestamps in proptest::collection::vec(0i64..2_000_000_000, 0..40)) {
            let records: Vec<EventRecord> = timestamps
                .iter()
                .map(|secs| {
                    EventRecord::push(
                        "sha",
                        "alice",
                        "main",
                        Utc.timestamp_opt(*secs, 0).unwrap(),
                    )
                })
                .collect();
            let n = records.len();
            prop_assert_eq!(format_events(records).len(), n.min(DISPLAY_LIMIT));
        }

        #[test]
        fn matches_explicit_sort_and_truncate(timestamps in proptest::collection::vec(0i64..2_000_000_000, 0..40)) {
            let records: Vec<EventRecord> = timestamps
                .iter()
                .map(|secs| {
                    EventRecord::push(
                        "sha",
                        "alice",
                        "main",
                        Utc.timestamp_opt(*secs, 0).unwrap(),
                    )
                })
                .collect();

            let mut sorted = records.clone();
            sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            sorted.truncate(DISPLAY_LIMIT);
            let expected: Vec<String> = format_events(sorted);

            prop_assert_eq!(format_events(records), expected);
        }
    }
}

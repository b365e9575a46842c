use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Shown when a topic's last-activity timestamp is missing or unreadable.
pub const UNKNOWN_ACTIVITY: &str = "unknown";

/// Coarse "time since" label: minutes under an hour, hours under a day, days otherwise.
///
/// Timestamps ahead of `now` (clock skew between the feed and this machine)
/// count as zero elapsed time and render as `0m ago`.
pub fn time_ago(bumped_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - bumped_at).num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{days}d ago")
}

/// Label for a raw `bumped_at` value. Unreadable values get [`UNKNOWN_ACTIVITY`]
/// instead of failing the row.
pub fn activity_label(bumped_at: Option<&str>, now: DateTime<Utc>) -> String {
    match bumped_at.and_then(parse_timestamp) {
        Some(bumped_at) => time_ago(bumped_at, now),
        None => UNKNOWN_ACTIVITY.to_string(),
    }
}

/// RFC 3339 first, then zone-less date-times and bare dates, both read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCount {
    Exact(u64),
    Thousands(u64),
}

/// Truncates to whole thousands; there is no million tier.
pub fn abbreviate_count(views: u64) -> ViewCount {
    if views >= 1000 {
        ViewCount::Thousands(views / 1000)
    } else {
        ViewCount::Exact(views)
    }
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewCount::Exact(n) => write!(f, "{n}"),
            ViewCount::Thousands(k) => write!(f, "{k}k"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone as _};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 15, 16, 0, 0).unwrap()
    }

    #[test]
    fn minute_bucket() {
        assert_eq!(time_ago(now() - Duration::minutes(5), now()), "5m ago");
        assert_eq!(time_ago(now(), now()), "0m ago");
        assert_eq!(time_ago(now() - Duration::seconds(59), now()), "0m ago");
        assert_eq!(time_ago(now() - Duration::minutes(59), now()), "59m ago");
    }

    #[test]
    fn hour_bucket_starts_at_sixty_minutes() {
        assert_eq!(time_ago(now() - Duration::minutes(60), now()), "1h ago");
        assert_eq!(time_ago(now() - Duration::minutes(90), now()), "1h ago");
        assert_eq!(
            time_ago(now() - Duration::hours(23) - Duration::minutes(59), now()),
            "23h ago"
        );
    }

    #[test]
    fn day_bucket() {
        assert_eq!(time_ago(now() - Duration::hours(24), now()), "1d ago");
        assert_eq!(time_ago(now() - Duration::hours(50), now()), "2d ago");
        assert_eq!(time_ago(now() - Duration::days(400), now()), "400d ago");
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        assert_eq!(time_ago(now() + Duration::minutes(5), now()), "0m ago");
        assert_eq!(time_ago(now() + Duration::days(3), now()), "0m ago");
    }

    #[test]
    fn parses_zoned_and_zone_less_timestamps() {
        let expected = Utc.with_ymd_and_hms(2024, 4, 15, 16, 1, 26).unwrap();
        assert_eq!(parse_timestamp("2024-04-15T16:01:26Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-04-15T18:01:26+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-04-15T16:01:26"), Some(expected));
        assert_eq!(parse_timestamp("2024-04-15 16:01:26"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-04-15T16:01:26.403").map(|ts| ts.timestamp_millis()),
            Some(expected.timestamp_millis() + 403)
        );
        assert_eq!(
            parse_timestamp("2024-04-15"),
            Some(Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unreadable_timestamps_get_the_unknown_label() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(activity_label(Some("not a date"), now()), UNKNOWN_ACTIVITY);
        assert_eq!(activity_label(None, now()), UNKNOWN_ACTIVITY);
    }

    #[test]
    fn activity_label_uses_time_buckets() {
        assert_eq!(activity_label(Some("2024-04-15T15:50:00Z"), now()), "10m ago");
        assert_eq!(activity_label(Some("2024-04-15T13:00:00"), now()), "3h ago");
    }

    #[test]
    fn counts_below_a_thousand_are_unchanged() {
        assert_eq!(abbreviate_count(542), ViewCount::Exact(542));
        assert_eq!(abbreviate_count(0), ViewCount::Exact(0));
        assert_eq!(abbreviate_count(999).to_string(), "999");
    }

    #[test]
    fn counts_truncate_to_thousands() {
        assert_eq!(abbreviate_count(1000).to_string(), "1k");
        assert_eq!(abbreviate_count(1500).to_string(), "1k");
        assert_eq!(abbreviate_count(1999).to_string(), "1k");
        assert_eq!(abbreviate_count(25_430).to_string(), "25k");
        assert_eq!(abbreviate_count(1_000_000).to_string(), "1000k");
    }
}

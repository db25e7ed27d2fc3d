use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Format the time elapsed between `created` and `now` as a coarse age.
///
/// Buckets are checked from largest to smallest and always truncate, so
/// 23h59m59s is "23h" and 90s is "1m". Clock skew that puts `created` in
/// the future falls through to the seconds bucket.
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - created).num_seconds();

    if elapsed >= DAY {
        format!("{}d", elapsed / DAY)
    } else if elapsed >= HOUR {
        format!("{}h", elapsed / HOUR)
    } else if elapsed >= MINUTE {
        format!("{}m", elapsed / MINUTE)
    } else {
        format!("{elapsed}s")
    }
}

/// Age column for an object's creation timestamp.
pub fn age_of(created: Option<&Time>, now: DateTime<Utc>) -> String {
    match created {
        Some(ts) => format_age(ts.0, now),
        None => "<unknown>".to_string(),
    }
}

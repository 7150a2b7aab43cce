use std::collections::HashSet;

/// Opaque user identifier (`u1`, `u_1718000000000`, ...).
pub type UserId = String;

const ID_PREFIX: &str = "u_";

/// Generate a time-based id that does not collide with any of `existing`.
pub fn generate_user_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> UserId {
    generate_user_id_at(chrono::Utc::now().timestamp_millis(), existing)
}

/// Same as [`generate_user_id`] with an explicit clock reading.
///
/// Two adds inside the same millisecond bump the counter instead of reusing the id.
pub fn generate_user_id_at<'a>(
    millis: i64,
    existing: impl IntoIterator<Item = &'a str>,
) -> UserId {
    let taken: HashSet<&str> = existing.into_iter().collect();
    let mut stamp = millis;
    loop {
        let candidate = format!("{}{}", ID_PREFIX, stamp);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        stamp += 1;
    }
}

//! Date and status normalization for attendance sources.

/// Normalize a source date to `YYYY-MM-DD`.
///
/// Accepts `YYYY-MM-DD` (returned as-is), `DD-MM-YYYY`, and unseparated
/// `DDMMYYYY`. Anything else passes through unchanged — a documented
/// tolerance inherited from the original data, not a failure.
pub fn normalize_date(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    let bytes = s.as_bytes();

    // YYYY-MM-DD
    if s.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && digits(&s[0..4]) && digits(&s[5..7]) && digits(&s[8..10])
    {
        return s.to_string();
    }

    // DD-MM-YYYY
    if s.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && digits(&s[0..2]) && digits(&s[3..5]) && digits(&s[6..10])
    {
        return format!("{}-{}-{}", &s[6..10], &s[3..5], &s[0..2]);
    }

    // DDMMYYYY
    if s.len() == 8 && digits(s) {
        return format!("{}-{}-{}", &s[4..8], &s[2..4], &s[0..2]);
    }

    s.to_string()
}

/// Normalize an attendance status to its canonical form.
///
/// `p`/`present` → `Present`, `a`/`absent` → `Absent` (case-insensitive),
/// empty → `Absent`, anything else is capitalized as-is.
pub fn normalize_status(raw: &str) -> String {
    let s = raw.trim().to_lowercase();
    match s.as_str() {
        "p" | "present" => "Present".to_string(),
        "a" | "absent" => "Absent".to_string(),
        "" => "Absent".to_string(),
        _ => {
            let mut chars = s.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => "Absent".to_string(),
            }
        }
    }
}

fn digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(normalize_date("2026-03-15"), "2026-03-15");
    }

    #[test]
    fn day_first_dates_are_reordered() {
        assert_eq!(normalize_date("15-03-2026"), "2026-03-15");
    }

    #[test]
    fn unseparated_dates_are_split() {
        assert_eq!(normalize_date("15032026"), "2026-03-15");
    }

    #[test]
    fn unrecognized_dates_pass_through_unchanged() {
        assert_eq!(normalize_date("March 15, 2026"), "March 15, 2026");
        assert_eq!(normalize_date("2026/03/15"), "2026/03/15");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn present_absent_shorthand() {
        assert_eq!(normalize_status("p"), "Present");
        assert_eq!(normalize_status("P"), "Present");
        assert_eq!(normalize_status("present"), "Present");
        assert_eq!(normalize_status("PRESENT"), "Present");
        assert_eq!(normalize_status("a"), "Absent");
        assert_eq!(normalize_status("Absent"), "Absent");
    }

    #[test]
    fn empty_status_defaults_to_absent() {
        assert_eq!(normalize_status(""), "Absent");
        assert_eq!(normalize_status("   "), "Absent");
    }

    #[test]
    fn other_statuses_are_capitalized() {
        assert_eq!(normalize_status("on-duty"), "On-duty");
        assert_eq!(normalize_status("LEAVE"), "Leave");
    }
}

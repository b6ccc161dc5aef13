pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// Compact count with B/M/K suffixes, one decimal place
pub fn format_count(count: u64) -> String {
    let value = count as f64;
    if count >= 1_000_000_000 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if count >= 1_000_000 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        count.to_string()
    }
}

pub fn format_duration(total_seconds: u64) -> Option<String> {
    if total_seconds == 0 {
        return None;
    }
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        Some(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Some(format!("{}:{:02}", minutes, seconds))
    }
}

/// Extracts a count from a free-text label such as `"1.234.567 views"`.
///
/// Takes the first run of digits and separators, drops the separators and
/// parses what is left. Labels without digits yield zero; counts too large
/// for a `u64` saturate at `u64::MAX`.
pub fn parse_count_text(label: &str) -> u64 {
    let is_part = |c: char| c.is_ascii_digit() || c == '.' || c == ',';
    let Some(start) = label.find(is_part) else {
        return 0;
    };
    let digits = label[start..]
        .chars()
        .take_while(|c| is_part(*c))
        .filter(char::is_ascii_digit);
    saturating_digits(digits).unwrap_or(0)
}

// None when there are no digits at all
fn saturating_digits(digits: impl Iterator<Item = char>) -> Option<u64> {
    let mut value = None;
    for digit in digits.filter_map(|c| c.to_digit(10)) {
        let so_far: u64 = value.unwrap_or(0);
        value = Some(so_far.saturating_mul(10).saturating_add(u64::from(digit)));
    }
    value
}

/// Reads the leading integer of a string the way a lenient number input
/// would: surrounding whitespace is ignored, trailing garbage is dropped.
pub fn parse_leading_int(text: &str) -> Option<u64> {
    saturating_digits(text.trim_start().chars().take_while(char::is_ascii_digit))
}

pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn initial_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_suffixes_switch_at_exact_thresholds() {
        let cases = [
            (0, "0"),
            (999, "999"),
            (1_000, "1.0K"),
            (1_500, "1.5K"),
            (999_999, "1000.0K"),
            (1_200_000, "1.2M"),
            (999_999_999, "1000.0M"),
            (2_500_000_000, "2.5B"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_count(input), expected, "format_count({input})");
        }
    }

    #[test]
    fn durations_pad_minutes_and_seconds() {
        assert_eq!(format_duration(45).as_deref(), Some("0:45"));
        assert_eq!(format_duration(125).as_deref(), Some("2:05"));
        assert_eq!(format_duration(3725).as_deref(), Some("1:02:05"));
        assert_eq!(format_duration(0), None);
    }

    #[test]
    fn count_labels_strip_separators() {
        assert_eq!(parse_count_text("1.234.567 Aufrufe"), 1_234_567);
        assert_eq!(parse_count_text("12,345 views"), 12_345);
        assert_eq!(parse_count_text("No views"), 0);
        assert_eq!(parse_count_text(". views"), 0);
        assert_eq!(parse_count_text(""), 0);
    }

    #[test]
    fn oversized_counts_saturate() {
        assert_eq!(parse_count_text("99.999.999.999.999.999.999.999 views"), u64::MAX);
        assert_eq!(parse_count_text("18446744073709551615 views"), u64::MAX);
        assert_eq!(parse_count_text("18446744073709551614 views"), u64::MAX - 1);
        assert_eq!(parse_leading_int("123456789012345678901234567890"), Some(u64::MAX));
    }

    #[test]
    fn leading_int_ignores_suffix() {
        assert_eq!(parse_leading_int(" 42 subscribers"), Some(42));
        assert_eq!(parse_leading_int("abc"), None);
    }

    #[test]
    fn truncation_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("äöüß", 2), "äö...");
    }

    #[test]
    fn initial_letter_defaults_to_a() {
        assert_eq!(initial_letter("bob"), "B");
        assert_eq!(initial_letter(""), "A");
    }

    #[test]
    fn iso_dates_are_shortened() {
        assert_eq!(format_iso8601_date("2024-03-01T12:00:00Z"), "2024-03-01");
        assert_eq!(format_iso8601_date("vor 2 Tagen"), "vor 2 Tagen");
    }
}

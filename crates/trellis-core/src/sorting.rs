//! Category ordering helpers: numeric intervals, months, numeric-aware labels
//!
//! Every sort here is stable: entries with equal keys keep their input order.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Anything with a display label that can be ordered
pub trait Labelled {
    fn label(&self) -> &str;
}

impl Labelled for String {
    fn label(&self) -> &str {
        self
    }
}

impl Labelled for &str {
    fn label(&self) -> &str {
        self
    }
}

/// Groupings whose labels are numeric intervals ("11-12", "(empty)", "total")
pub const INTERVAL_GROUPS: [&str; 5] = [
    "WEIGHT",
    "HEIGHT",
    "TOTAL_DURATION_ON_STUDY",
    "DOSE",
    "DURATION_ON_STUDY",
];

const EMPTY_INTERVAL: &str = "(empty)";
const TOTAL_INTERVAL: &str = "total";

pub fn is_interval_group(group_name: &str) -> bool {
    INTERVAL_GROUPS.contains(&group_name)
}

// ============================================================================
// INTERVALS
// ============================================================================

/// Sort key: numbers first, then unreadable labels, "(empty)", "total"
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
enum IntervalKey {
    Number(f64),
    Unparsed,
    Empty,
    Total,
}

fn interval_key(label: &str) -> IntervalKey {
    let label = label.trim();
    if label.eq_ignore_ascii_case(EMPTY_INTERVAL) {
        return IntervalKey::Empty;
    }
    if label.eq_ignore_ascii_case(TOTAL_INTERVAL) {
        return IntervalKey::Total;
    }

    let lower_bound = label
        .split('-')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_start_matches(['<', '>', '='])
        .trim_end_matches('+')
        .trim();

    match lower_bound.parse::<f64>() {
        Ok(n) if n.is_finite() => IntervalKey::Number(n),
        _ => IntervalKey::Unparsed,
    }
}

/// Order interval-labelled entries of a whitelisted grouping by their lower bound.
///
/// Groupings outside [`INTERVAL_GROUPS`] and empty input come back untouched.
pub fn sort_intervals<T: Labelled>(entries: Vec<T>, group_name: &str) -> Vec<T> {
    sort_intervals_by(entries, group_name, |e| e.label())
}

/// [`sort_intervals`] with a custom sort property
pub fn sort_intervals_by<T, F>(mut entries: Vec<T>, group_name: &str, label: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    if entries.is_empty() || !is_interval_group(group_name) {
        return entries;
    }

    entries.sort_by(|a, b| {
        interval_key(label(a))
            .partial_cmp(&interval_key(label(b)))
            .unwrap_or(Ordering::Equal)
    });
    entries
}

// ============================================================================
// MONTHS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MonthKey {
    Date(NaiveDate),
    Unparsed,
    Empty,
    Total,
}

/// Parse `MON-YYYY` or `DD-MON-YY ...` labels
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    let token = label.split_whitespace().next()?;

    NaiveDate::parse_from_str(&format!("01-{token}"), "%d-%b-%Y")
        .or_else(|_| NaiveDate::parse_from_str(token, "%d-%b-%y"))
        .ok()
}

fn month_key(label: &str) -> MonthKey {
    let label = label.trim();
    if label.eq_ignore_ascii_case(EMPTY_INTERVAL) {
        return MonthKey::Empty;
    }
    if label.eq_ignore_ascii_case(TOTAL_INTERVAL) {
        return MonthKey::Total;
    }
    parse_month_label(label).map_or(MonthKey::Unparsed, MonthKey::Date)
}

/// Chronological order for month-like labels; "(empty)" and "total" go last
pub fn sort_months<T: Labelled>(entries: Vec<T>) -> Vec<T> {
    sort_months_by(entries, |e| e.label())
}

/// [`sort_months`] with a custom sort property
pub fn sort_months_by<T, F>(mut entries: Vec<T>, label: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    if entries.is_empty() {
        return entries;
    }
    entries.sort_by_key(|e| month_key(label(e)));
    entries
}

// ============================================================================
// NUMERIC-AWARE LABELS
// ============================================================================

fn leading_number(label: &str) -> Option<f64> {
    let trimmed = label.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (c == '.' && i > 0)))
        .map_or(trimmed.len(), |(i, _)| i);

    if end == 0 {
        return None;
    }
    trimmed[..end].trim_end_matches('.').parse().ok()
}

/// Labels starting with a number compare numerically and precede the rest,
/// which compare lexicographically
pub fn compare_numeric_aware(a: &str, b: &str) -> Ordering {
    match (leading_number(a), leading_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_group_is_noop() {
        let data = labels(&["total", "11-12", "(empty)", "1-2"]);
        assert_eq!(sort_intervals(data.clone(), "UNKNOWN_GROUP"), data);
    }

    #[test]
    fn test_dose_intervals() {
        let data = labels(&["total", "11-12", "(empty)", "1-2", "5-10"]);
        let sorted = sort_intervals(data, "DOSE");
        assert_eq!(sorted, labels(&["1-2", "5-10", "11-12", "(empty)", "total"]));
    }

    #[test]
    fn test_interval_sort_is_stable() {
        let data = labels(&["10-20 kg", "10-20", "0-10"]);
        let sorted = sort_intervals(data, "WEIGHT");
        assert_eq!(sorted, labels(&["0-10", "10-20 kg", "10-20"]));
    }

    #[test]
    fn test_unparsed_interval_before_empty() {
        let data = labels(&["(empty)", "unknown", "3-4"]);
        let sorted = sort_intervals(data, "HEIGHT");
        assert_eq!(sorted, labels(&["3-4", "unknown", "(empty)"]));
    }

    #[test]
    fn test_sort_intervals_by_property() {
        #[derive(Debug, PartialEq)]
        struct Row {
            name: &'static str,
        }
        let rows = vec![Row { name: "20-30" }, Row { name: "0-10" }];
        let sorted = sort_intervals_by(rows, "DURATION_ON_STUDY", |r| r.name);
        assert_eq!(sorted[0].name, "0-10");
    }

    #[test]
    fn test_sort_months() {
        let data = labels(&["total", "MAR-2019", "(empty)", "JAN-2020", "15-FEB-19 10:30"]);
        let sorted = sort_months(data);
        assert_eq!(
            sorted,
            labels(&["15-FEB-19 10:30", "MAR-2019", "JAN-2020", "(empty)", "total"])
        );
    }

    #[test]
    fn test_parse_month_label() {
        assert_eq!(
            parse_month_label("JAN-2020"),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(
            parse_month_label("03-Apr-18 00:00"),
            NaiveDate::from_ymd_opt(2018, 4, 3)
        );
        assert_eq!(parse_month_label("soon"), None);
    }

    #[test]
    fn test_numeric_aware_compare() {
        let mut values = vec!["10 mg", "Summary", "2 mg", "Alpha", "2.5 mg"];
        values.sort_by(|a, b| compare_numeric_aware(a, b));
        assert_eq!(values, vec!["2 mg", "2.5 mg", "10 mg", "Alpha", "Summary"]);
    }
}

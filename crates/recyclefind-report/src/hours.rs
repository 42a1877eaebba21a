//! Parsing of Places-style opening hours such as
//! `"Monday: 9:00 AM – 5:00 PM"` into per-day open and close times.

use chrono::NaiveTime;

/// Opening hours for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday.
    pub day_of_week: u8,
    pub open: Option<NaiveTime>,
    pub close: Option<NaiveTime>,
    pub closed: bool,
}

fn day_number(day: &str) -> Option<u8> {
    match day {
        "Sunday" => Some(0),
        "Monday" => Some(1),
        "Tuesday" => Some(2),
        "Wednesday" => Some(3),
        "Thursday" => Some(4),
        "Friday" => Some(5),
        "Saturday" => Some(6),
        _ => None,
    }
}

/// Collapses doubled meridiems (`"5:00 PM PM"`) and normalizes spacing so
/// the meridiem is separated from the time by exactly one space.
#[must_use]
pub fn clean_time(raw: &str) -> String {
    let collapsed = raw
        .trim()
        .replace("AM AM", "AM")
        .replace("PM AM", "PM")
        .replace("AM PM", "AM")
        .replace("PM PM", "PM")
        .replace("AM", " AM")
        .replace("PM", " PM");
    collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_meridiem(time: &str) -> bool {
    time.contains(" AM") || time.contains(" PM")
}

fn hour_of(time: &str) -> Option<u32> {
    time.split(':').next()?.trim().parse().ok()
}

/// Parses a 12-hour time. A time without a meridiem is taken as AM before
/// noon and PM from noon on.
#[must_use]
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let mut time = clean_time(raw);
    if time.is_empty() {
        return None;
    }
    if !has_meridiem(&time) {
        let hour = hour_of(&time)?;
        time.push_str(if hour < 12 { " AM" } else { " PM" });
    }
    NaiveTime::parse_from_str(&time, "%I:%M %p").ok()
}

/// Splits `"9:00 AM – 5:00 PM"` into its two halves. En dash first, then a
/// spaced hyphen, then a bare hyphen; anything other than exactly two
/// halves is rejected.
fn split_range(times: &str) -> Option<(&str, &str)> {
    let separator = if times.contains('\u{2013}') {
        "\u{2013}"
    } else if times.contains(" - ") {
        " - "
    } else {
        "-"
    };
    let mut parts = times.split(separator);
    let open = parts.next()?;
    let close = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((open, close))
}

fn parse_day(entry: &str) -> Option<DayHours> {
    let (day, times) = entry.split_once(": ")?;
    let day_of_week = day_number(day.trim())?;
    let times = times.trim();

    if times.eq_ignore_ascii_case("closed") {
        return Some(DayHours {
            day_of_week,
            open: None,
            close: None,
            closed: true,
        });
    }
    if times.eq_ignore_ascii_case("open 24 hours") {
        return Some(DayHours {
            day_of_week,
            open: NaiveTime::from_hms_opt(0, 0, 0),
            close: NaiveTime::from_hms_opt(23, 59, 59),
            closed: false,
        });
    }

    let (open_raw, close_raw) = split_range(times)?;
    let mut open = clean_time(open_raw);
    let close = clean_time(close_raw);

    // "9:00 – 5:00 PM": the opening time inherits a meridiem from the close.
    if !has_meridiem(&open) {
        if close.contains(" AM") {
            open.push_str(" AM");
        } else if close.contains(" PM") {
            let open_hour = hour_of(&open)?;
            let close_hour = hour_of(&close)?;
            if open_hour < close_hour || close_hour == 12 {
                open.push_str(" AM");
            } else {
                open.push_str(" PM");
            }
        }
    }

    match (parse_time(&open), parse_time(&close)) {
        (Some(open), Some(close)) => Some(DayHours {
            day_of_week,
            open: Some(open),
            close: Some(close),
            closed: false,
        }),
        _ => None,
    }
}

/// Parses every entry that can be understood; the rest are logged and
/// skipped.
#[must_use]
pub fn parse_opening_hours(entries: &[String]) -> Vec<DayHours> {
    entries
        .iter()
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| {
            let parsed = parse_day(entry);
            if parsed.is_none() {
                tracing::warn!(entry = %entry, "skipping unparseable opening hours");
            }
            parsed
        })
        .collect()
}

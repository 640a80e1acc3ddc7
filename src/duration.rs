//! Duration strings to whole minutes.
//!
//! Two shapes show up in scraped recipe data: free text such as
//! `"1 hr 30 mins"` and ISO 8601 durations such as `"PT1H30M"` taken from
//! schema.org markup. Both collapse to a minute count; anything that cannot
//! be read counts as zero.

const HOUR_UNITS: &[&str] = &["h", "hr", "hrs", "hour", "hours"];
const MINUTE_UNITS: &[&str] = &["m", "min", "mins", "minute", "minutes"];

/// Convert a duration string into a number of minutes.
///
/// Missing or non-integer components count as 0, so malformed input yields
/// 0 instead of an error.
pub fn parse_duration_minutes(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Some(iso) = trimmed.strip_prefix("PT") {
        return parse_iso_minutes(iso);
    }

    let mut hours = None;
    let mut minutes = None;

    for (quantity, unit) in quantities(trimmed) {
        let unit = unit.to_lowercase();
        if hours.is_none() && HOUR_UNITS.contains(&unit.as_str()) {
            hours = Some(quantity.parse::<u32>().unwrap_or(0));
        } else if minutes.is_none() && MINUTE_UNITS.contains(&unit.as_str()) {
            minutes = Some(quantity.parse::<u32>().unwrap_or(0));
        }
    }

    total_minutes(hours.unwrap_or(0), minutes.unwrap_or(0))
}

fn total_minutes(hours: u32, minutes: u32) -> u32 {
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Pairs of (quantity, unit) in reading order: "1 hr 30mins" gives
/// `[("1", "hr"), ("30", "mins")]`. A quantity is a run of digits and dots,
/// its unit the run of letters that follows, possibly after whitespace.
fn quantities(text: &str) -> Vec<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
            i += 1;
        }
        let quantity = &text[start..i];

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let unit_start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
            i += 1;
        }

        pairs.push((quantity, &text[unit_start..i]));
    }

    pairs
}

/// Minutes in the time part of an ISO 8601 duration (after "PT")
fn parse_iso_minutes(duration: &str) -> u32 {
    let mut hours = 0;
    let mut minutes = 0;
    let mut seconds = 0.0_f64;
    let mut start = 0;

    for (pos, designator) in duration.char_indices() {
        let value = &duration[start..pos];
        match designator {
            'H' => hours = value.parse::<u32>().unwrap_or(0),
            'M' => minutes = value.parse::<u32>().unwrap_or(0),
            'S' => seconds = value.parse::<f64>().unwrap_or(0.0),
            _ => continue,
        }
        start = pos + designator.len_utf8();
    }

    let from_seconds = if seconds.is_finite() && seconds > 0.0 {
        (seconds / 60.0).round().min(u32::MAX as f64) as u32
    } else {
        0
    };

    total_minutes(hours, minutes).saturating_add(from_seconds)
}

//! Calendar-difference decomposition and relative time rendering.
//!
//! Produces a human-readable description of how far a target instant lies
//! from a reference instant ("3 days ago", "in 1 year 1 month"), together
//! with the normalized per-unit breakdown. All functions take explicit
//! inputs (no system clock access) — the caller samples the reference
//! instant once and passes it in, and that single anchor drives both the
//! direction check and the decomposition.
//!
//! The difference is computed field-wise on calendar fields, not from the
//! elapsed duration: "same day-of-month, one month later" is exactly
//! 1 month, 0 days, regardless of how long that month was. Raw field-wise
//! deltas can be transiently negative; a fixed borrow cascade
//! (seconds → minutes → hours → days → months → years) normalizes them.
//!
//! # Functions
//!
//! - [`convert_to_relative_time`] — RFC 3339 string in, [`RelativeResult`] out
//! - [`relative_between`] — typed entry over two instants
//! - [`classify`] — direction of the target relative to the reference
//! - [`decompose_past`] / [`decompose_future`] — direction-specific decomposition

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;

use crate::error::RelativeError;

// ── Direction ───────────────────────────────────────────────────────────────

/// Where the target instant lies relative to the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Target is strictly before the reference.
    Past,
    /// Target is strictly after the reference.
    Future,
    /// Target is the same instant as the reference.
    Equal,
}

/// Classify the direction of `target` relative to `reference`.
///
/// The comparison is strict chronological ordering of the underlying
/// timestamps at full (sub-second) precision, never field-wise equality:
/// two instants half a second apart have identical calendar fields but a
/// real direction.
pub fn classify(reference: DateTime<Utc>, target: DateTime<Utc>) -> Direction {
    match target.cmp(&reference) {
        Ordering::Less => Direction::Past,
        Ordering::Greater => Direction::Future,
        Ordering::Equal => Direction::Equal,
    }
}

// ── RelativeResult ──────────────────────────────────────────────────────────

/// A relative time description plus its per-unit breakdown.
///
/// The breakdown is normalized: months < 12, hours < 24, minutes and
/// seconds < 60, days at most 30 (below the reference month's length
/// whenever the day borrow engages). One inherited quirk: the day borrow
/// always uses the reference month's length (see [`decompose_past`]), so
/// `days` can dip as low as −3 when the gap crosses a month longer than
/// the reference's. Such values never appear in `text`.
#[derive(Debug, Clone, Serialize)]
pub struct RelativeResult {
    /// The rendered sentence (e.g., "1 year 3 months ago", "in 2 days").
    pub text: String,
    /// Whole years of difference.
    pub years: i64,
    /// Months component (0-11).
    pub months: i64,
    /// Days component (at most 30; see the type-level bounds note).
    pub days: i64,
    /// Hours component (0-23).
    pub hours: i64,
    /// Minutes component (0-59).
    pub minutes: i64,
    /// Seconds component (0-59).
    pub seconds: i64,
}

impl RelativeResult {
    /// The fixed result for a target equal to the reference.
    fn just_now() -> Self {
        RelativeResult {
            text: "Just Now!".to_string(),
            years: 0,
            months: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    fn from_delta(text: String, delta: UnitDelta) -> Self {
        RelativeResult {
            text,
            years: delta.years,
            months: delta.months,
            days: delta.days,
            hours: delta.hours,
            minutes: delta.minutes,
            seconds: delta.seconds,
        }
    }
}

// ── Decomposition ───────────────────────────────────────────────────────────

/// Raw field-wise difference between two instants, before normalization.
#[derive(Debug, Clone, Copy)]
struct UnitDelta {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

/// Field-wise subtraction `later - earlier` on calendar fields.
///
/// Each unit is computed independently from the two instants' own fields,
/// so individual components can come out negative when, e.g., the later
/// instant's day-of-month is smaller. The borrow cascade fixes that up.
fn raw_delta(earlier: DateTime<Utc>, later: DateTime<Utc>) -> UnitDelta {
    UnitDelta {
        years: i64::from(later.year() - earlier.year()),
        months: i64::from(later.month()) - i64::from(earlier.month()),
        days: i64::from(later.day()) - i64::from(earlier.day()),
        hours: i64::from(later.hour()) - i64::from(earlier.hour()),
        minutes: i64::from(later.minute()) - i64::from(earlier.minute()),
        seconds: i64::from(later.second()) - i64::from(earlier.second()),
    }
}

/// Apply the borrow cascade, right to left:
/// seconds → minutes → hours → days → months → years.
///
/// Each check is a single conditional, not a loop: raw deltas are confined
/// to one unit's natural range, so at most one borrow per unit can occur.
/// The day borrow uses the length of the **reference** instant's month, not
/// the month the gap actually crosses — a fixed policy; downstream
/// consumers rely on the exact day counts it produces.
fn normalize(mut delta: UnitDelta, reference: DateTime<Utc>) -> UnitDelta {
    if delta.seconds < 0 {
        delta.seconds += 60;
        delta.minutes -= 1;
    }
    if delta.minutes < 0 {
        delta.minutes += 60;
        delta.hours -= 1;
    }
    if delta.hours < 0 {
        delta.hours += 24;
        delta.days -= 1;
    }
    if delta.days < 0 {
        delta.days += days_in_month(reference.year(), reference.month());
        delta.months -= 1;
    }
    if delta.months < 0 {
        delta.months += 12;
        delta.years -= 1;
    }
    delta
}

/// Decompose the gap to a target that lies **before** the reference.
///
/// Field-wise subtraction (reference minus target) followed by the borrow
/// cascade; the rendered sentence ends in "ago". Callers are expected to
/// have classified the direction already — [`relative_between`] does both.
pub fn decompose_past(reference: DateTime<Utc>, target: DateTime<Utc>) -> RelativeResult {
    let delta = normalize(raw_delta(target, reference), reference);
    let text = format!("{} ago", build_parts(&delta).join(" "));
    RelativeResult::from_delta(text.trim().to_string(), delta)
}

/// Decompose the gap to a target that lies **after** the reference.
///
/// Same core as [`decompose_past`] with the operands swapped; the rendered
/// sentence starts with "in".
pub fn decompose_future(reference: DateTime<Utc>, target: DateTime<Utc>) -> RelativeResult {
    let delta = normalize(raw_delta(reference, target), reference);
    let text = format!("in {}", build_parts(&delta).join(" "));
    RelativeResult::from_delta(text.trim().to_string(), delta)
}

// ── Rendering helpers ───────────────────────────────────────────────────────

/// Render the non-zero units, largest first, pluralized with a trailing
/// `s` when the value exceeds one. Zero and negative values are omitted.
fn build_parts(delta: &UnitDelta) -> Vec<String> {
    let units = [
        (delta.years, "year"),
        (delta.months, "month"),
        (delta.days, "day"),
        (delta.hours, "hour"),
        (delta.minutes, "minute"),
        (delta.seconds, "second"),
    ];

    let mut parts = Vec::new();
    for (value, name) in units {
        if value > 0 {
            parts.push(format!(
                "{} {}{}",
                value,
                name,
                if value > 1 { "s" } else { "" }
            ));
        }
    }
    parts
}

/// Days in a proleptic Gregorian calendar month (month is 1-12).
fn days_in_month(year: i32, month: u32) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ── Entry points ────────────────────────────────────────────────────────────

/// Compute the relative time description of `target` as seen from `reference`.
///
/// The typed, total entry: classifies the direction and routes to the
/// matching decomposition, or returns the fixed "Just Now!" result when the
/// two instants coincide. The same `reference` drives both the
/// classification and the day-borrow month length, so one sampled anchor
/// serves the whole call.
pub fn relative_between(reference: DateTime<Utc>, target: DateTime<Utc>) -> RelativeResult {
    match classify(reference, target) {
        Direction::Past => decompose_past(reference, target),
        Direction::Future => decompose_future(reference, target),
        Direction::Equal => RelativeResult::just_now(),
    }
}

/// Convert an RFC 3339 datetime string to a relative time description.
///
/// # Arguments
///
/// * `reference` — The anchor instant (typically `Utc::now()`, sampled once by the caller)
/// * `target` — An RFC 3339 datetime string (e.g., `"2024-10-03T10:00:00Z"`)
///
/// # Errors
///
/// Returns [`RelativeError::InvalidInput`] if `target` cannot be parsed as
/// an RFC 3339 datetime. Parseable values are never rejected on semantic
/// grounds.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use relatime::convert_to_relative_time;
///
/// let reference = Utc.with_ymd_and_hms(2024, 10, 4, 10, 0, 0).unwrap();
/// let result = convert_to_relative_time(reference, "2023-10-04T10:00:00Z").unwrap();
/// assert_eq!(result.text, "1 year ago");
/// ```
pub fn convert_to_relative_time(
    reference: DateTime<Utc>,
    target: &str,
) -> Result<RelativeResult, RelativeError> {
    let target = parse_rfc3339(target)?;
    Ok(relative_between(reference, target))
}

/// Parse an RFC 3339 datetime string into `DateTime<Utc>`.
fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>, RelativeError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RelativeError::InvalidInput(format!("'{}': {}", s, e)))
}

// ── Tests ───────────────────────────────────────────────────────────────────

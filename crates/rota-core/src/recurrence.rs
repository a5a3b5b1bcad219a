//! Next-occurrence search for repeat rules.
//!
//! Everything here is a pure function of its arguments: a reference date
//! ("now"), the task's anchor date, and a parsed [`Rule`]. Step-based rules
//! (`y`, `d`) always advance from the anchor, so the result is never the
//! anchor itself even when the anchor lies in the future. Scan-based rules
//! (`w`, `m`) instead start from whichever of anchor/now is later and walk
//! forward one day at a time. The two families deliberately differ; callers
//! observe the distinction.

use chrono::{Datelike, Duration, NaiveDate};

use crate::date;
use crate::error::RecurrenceError;
use crate::rule::Rule;

/// Upper bound for day-by-day scans, roughly ten years. The sparsest
/// satisfiable configuration is `m 29 2`, which can wait eight years for a
/// leap day across a non-leap century; a scan that runs longer means the
/// rule can never match (e.g. `m 30 2`) and fails with
/// [`RecurrenceError::SearchExhausted`].
pub const MAX_SEARCH_DAYS: u32 = 3660;

/// Compute the next occurrence of `rule` strictly after `now`, starting from
/// `anchor`.
pub fn next_date(
    now: NaiveDate,
    anchor: NaiveDate,
    rule: &Rule,
) -> Result<NaiveDate, RecurrenceError> {
    match rule {
        Rule::Yearly => Ok(next_yearly(now, anchor)),
        Rule::EveryNDays { interval } => Ok(next_every_n_days(now, anchor, *interval)),
        Rule::OnWeekdays { weekdays } => next_on_weekdays(now, anchor, weekdays),
        Rule::OnMonthDays { days, months } => next_on_month_days(now, anchor, days, months),
    }
}

/// Parse `anchor` and `repeat` and compute the next occurrence, all in the
/// `YYYYMMDD` wire representation.
///
/// This is the single entry point used by the task store and the HTTP
/// preview endpoint: rule validation is the same call with the result
/// discarded.
pub fn compute_next(now: NaiveDate, anchor: &str, repeat: &str) -> Result<String, RecurrenceError> {
    let anchor = date::parse_compact(anchor)?;
    let rule: Rule = repeat.parse()?;
    next_date(now, anchor, &rule).map(date::format_compact)
}

fn next_yearly(now: NaiveDate, anchor: NaiveDate) -> NaiveDate {
    let mut candidate = add_one_year(anchor);
    while candidate <= now {
        candidate = add_one_year(candidate);
    }
    candidate
}

fn next_every_n_days(now: NaiveDate, anchor: NaiveDate, interval: u32) -> NaiveDate {
    let step = Duration::days(i64::from(interval));
    let mut candidate = anchor + step;
    while candidate <= now {
        candidate = candidate + step;
    }
    candidate
}

fn next_on_weekdays(
    now: NaiveDate,
    anchor: NaiveDate,
    weekdays: &[u32],
) -> Result<NaiveDate, RecurrenceError> {
    let mut candidate = scan_start(now, anchor);
    // At most one full week; the weekday set is non-empty by construction.
    for _ in 0..7 {
        candidate = candidate + Duration::days(1);
        if weekdays.contains(&candidate.weekday().number_from_monday()) {
            return Ok(candidate);
        }
    }
    Err(RecurrenceError::SearchExhausted(7))
}

fn next_on_month_days(
    now: NaiveDate,
    anchor: NaiveDate,
    days: &[i32],
    months: &[u32],
) -> Result<NaiveDate, RecurrenceError> {
    let mut candidate = scan_start(now, anchor);
    for _ in 0..MAX_SEARCH_DAYS {
        candidate = candidate + Duration::days(1);
        if !months.is_empty() && !months.contains(&candidate.month()) {
            continue;
        }
        let last = last_day_of_month(candidate);
        if matches_day_target(candidate.day(), last, days) {
            return Ok(candidate);
        }
    }
    Err(RecurrenceError::SearchExhausted(MAX_SEARCH_DAYS))
}

/// Scan-based rules keep the anchor as the start only while it is still
/// ahead of `now`; a stale anchor snaps to `now`.
fn scan_start(now: NaiveDate, anchor: NaiveDate) -> NaiveDate {
    if anchor > now {
        anchor
    } else {
        now
    }
}

/// Positive targets name the day of month directly; −1 and −2 count back
/// from the month's last day.
fn matches_day_target(day: u32, last: u32, targets: &[i32]) -> bool {
    targets.iter().any(|&target| {
        if target > 0 {
            day == target as u32
        } else {
            i64::from(day) == i64::from(last) + 1 + i64::from(target)
        }
    })
}

fn last_day_of_month(date: NaiveDate) -> u32 {
    match date.month() {
        12 => 31,
        m => NaiveDate::from_ymd_opt(date.year(), m + 1, 1)
            .and_then(|d| d.pred_opt())
            .map_or(31, |d| d.day()),
    }
}

/// One calendar year forward. Feb 29 in a target year without a 29th rolls
/// over to Mar 1, the same normalization civil-date addition applies.
fn add_one_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() + 1, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(date.year() + 1, 3, 1))
        .unwrap_or(date)
}

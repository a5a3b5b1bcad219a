//! The repeat-rule grammar and parser.
//!
//! A rule is a type letter followed by space-separated arguments, with list
//! arguments comma-separated:
//!
//! | Rule                  | Meaning                                        |
//! |-----------------------|------------------------------------------------|
//! | `y`                   | Yearly, on the anchor's month and day          |
//! | `d <n>`               | Every `n` days, `n` in 1..=400                 |
//! | `w <list>`            | On weekdays, 1=Monday..7=Sunday                |
//! | `m <days> [<months>]` | On days of month, −1/−2 counting back from the month's end; optional month filter |

use std::str::FromStr;

use crate::error::RecurrenceError;

/// Largest accepted `d` interval.
pub const MAX_DAY_INTERVAL: u32 = 400;

/// A parsed repeat rule. Owned by a single computation; parsing never leaves
/// partial state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Recur on the anchor's month and day every year.
    Yearly,
    /// Recur every `interval` days from the anchor.
    EveryNDays { interval: u32 },
    /// Recur on any of the given weekdays (1=Monday..7=Sunday).
    OnWeekdays { weekdays: Vec<u32> },
    /// Recur on any of the given days of month; an empty `months` list means
    /// every month.
    OnMonthDays { days: Vec<i32>, months: Vec<u32> },
}

impl FromStr for Rule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RecurrenceError::EmptyRule);
        }
        let parts: Vec<&str> = s.split(' ').collect();
        match parts[0] {
            // Trailing tokens after "y" are tolerated and ignored.
            "y" => Ok(Rule::Yearly),
            "d" => {
                if parts.len() != 2 {
                    return Err(RecurrenceError::MalformedRule('d'));
                }
                let interval = parts[1]
                    .parse::<u32>()
                    .ok()
                    .filter(|n| (1..=MAX_DAY_INTERVAL).contains(n))
                    .ok_or_else(|| RecurrenceError::InvalidInterval(parts[1].to_string()))?;
                Ok(Rule::EveryNDays { interval })
            }
            "w" => {
                if parts.len() != 2 {
                    return Err(RecurrenceError::MalformedRule('w'));
                }
                let weekdays = parts[1]
                    .split(',')
                    .map(|tok| {
                        tok.parse::<u32>()
                            .ok()
                            .filter(|d| (1..=7).contains(d))
                            .ok_or_else(|| RecurrenceError::InvalidWeekday(tok.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Rule::OnWeekdays { weekdays })
            }
            "m" => {
                if !(2..=3).contains(&parts.len()) {
                    return Err(RecurrenceError::MalformedRule('m'));
                }
                let days = parts[1]
                    .split(',')
                    .map(|tok| {
                        tok.parse::<i32>()
                            .ok()
                            .filter(|d| (-2..=31).contains(d) && *d != 0)
                            .ok_or_else(|| RecurrenceError::InvalidMonthDay(tok.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let months = match parts.get(2) {
                    Some(list) => list
                        .split(',')
                        .map(|tok| {
                            tok.parse::<u32>()
                                .ok()
                                .filter(|m| (1..=12).contains(m))
                                .ok_or_else(|| RecurrenceError::InvalidMonth(tok.to_string()))
                        })
                        .collect::<Result<Vec<_>, _>>()?,
                    None => Vec::new(),
                };
                Ok(Rule::OnMonthDays { days, months })
            }
            other => Err(RecurrenceError::UnsupportedRule(other.to_string())),
        }
    }
}

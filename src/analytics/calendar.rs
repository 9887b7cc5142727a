use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::tally::Tally;
use crate::models::{DateCount, Message, WeekdayCount, weekday_name};

/// Weekday with the most messages
///
/// Ties go to the weekday that appears first in the selection. `None` when empty.
pub fn most_active_weekday(messages: &[&Message]) -> Option<WeekdayCount> {
    let tally: Tally<_> = messages.iter().map(|m| m.calendar.weekday).collect();
    tally
        .most_common(1)
        .into_iter()
        .next()
        .map(|(weekday, count)| WeekdayCount { weekday: weekday_name(weekday).to_string(), count })
}

/// Distinct calendar dates with at least one message, ascending
pub fn active_dates(messages: &[&Message]) -> BTreeSet<NaiveDate> {
    messages.iter().map(|m| m.calendar.date).collect()
}

pub fn active_day_count(messages: &[&Message]) -> u64 {
    active_dates(messages).len() as u64
}

/// Longest run of consecutive active dates
///
/// Message volume does not matter, only whether a date had any message.
pub fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u64 {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for &date in dates {
        current = match previous {
            Some(prev) if (date - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

/// Largest distance in days between two adjacent active dates; 0 with fewer than two
pub fn longest_inactive_gap(dates: &BTreeSet<NaiveDate>) -> u64 {
    dates
        .iter()
        .zip(dates.iter().skip(1))
        .map(|(earlier, later)| (*later - *earlier).num_days().max(0) as u64)
        .max()
        .unwrap_or(0)
}

/// Message count for every active date, ascending
pub fn daily_timeline(messages: &[&Message]) -> Vec<DateCount> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for message in messages {
        *per_day.entry(message.calendar.date).or_default() += 1;
    }
    per_day.into_iter().map(|(date, count)| DateCount { date, count }).collect()
}

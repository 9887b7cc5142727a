use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use chrono::{Datelike, Month, Weekday};

use crate::models::{
    ActivityAverages, ActivityHeatmap, LabeledCount, Message, ParticipantShare, hour_label,
    weekday_name,
};
use crate::utils::format::round2;

const WEEKDAYS: [Weekday; 7] =
    [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun];

/// Mean message count per month, day-of-month, ISO week and hour-of-day bucket
pub fn activity_averages(messages: &[&Message]) -> ActivityAverages {
    ActivityAverages {
        per_month: mean_per_bucket(messages, |m| {
            (m.calendar.year, m.calendar.month.number_from_month())
        }),
        per_day_of_month: mean_per_bucket(messages, |m| m.calendar.day),
        per_week: mean_per_bucket(messages, |m| {
            let week = m.calendar.date.iso_week();
            (week.year(), week.week())
        }),
        per_hour: mean_per_bucket(messages, |m| m.calendar.hour),
    }
}

fn mean_per_bucket<K, F>(messages: &[&Message], key: F) -> f64
where
    K: Eq + Hash,
    F: Fn(&Message) -> K,
{
    let buckets: HashSet<K> = messages.iter().map(|m| key(*m)).collect();
    if buckets.is_empty() {
        return 0.0;
    }
    round2(messages.len() as f64 / buckets.len() as f64)
}

/// Message count per sender, busiest first; ties by name
pub fn busiest_participants(messages: &[&Message]) -> Vec<ParticipantShare> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for message in messages {
        *counts.entry(message.sender.as_str()).or_default() += 1;
    }

    let total = messages.len() as f64;
    let mut shares: Vec<ParticipantShare> = counts
        .into_iter()
        .map(|(participant, count)| ParticipantShare {
            participant: participant.to_string(),
            messages: count,
            percent: round2(count as f64 / total * 100.0),
        })
        .collect();
    shares.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.participant.cmp(&b.participant)));
    shares
}

/// Counts per calendar month, oldest first, labelled `"January - 2024"`
pub fn busiest_months(messages: &[&Message]) -> Vec<LabeledCount> {
    grouped(
        messages,
        |m| (m.calendar.year, m.calendar.month.number_from_month()),
        |(year, month): (i32, u32)| {
            let name = Month::try_from(month as u8).map(|m| m.name()).unwrap_or("Unknown");
            format!("{} - {}", name, year)
        },
    )
}

/// Counts per weekday, Monday first
pub fn busiest_weekdays(messages: &[&Message]) -> Vec<LabeledCount> {
    grouped(messages, |m| m.calendar.weekday.num_days_from_monday(), |day: u32| {
        weekday_name(WEEKDAYS[day as usize % 7]).to_string()
    })
}

/// Counts per ISO week, oldest first, labelled `"Week 7 - 2024"`
pub fn busiest_weeks(messages: &[&Message]) -> Vec<LabeledCount> {
    grouped(
        messages,
        |m| {
            let week = m.calendar.date.iso_week();
            (week.year(), week.week())
        },
        |(year, week): (i32, u32)| format!("Week {} - {}", week, year),
    )
}

/// Counts per hour of day in clock order, labelled `"9 AM"`
pub fn busiest_hours(messages: &[&Message]) -> Vec<LabeledCount> {
    grouped(messages, |m| m.calendar.hour, hour_label)
}

fn grouped<K, F, L>(messages: &[&Message], key: F, label: L) -> Vec<LabeledCount>
where
    K: Ord,
    F: Fn(&Message) -> K,
    L: Fn(K) -> String,
{
    let mut groups: BTreeMap<K, u64> = BTreeMap::new();
    for message in messages {
        *groups.entry(key(*message)).or_default() += 1;
    }
    groups.into_iter().map(|(k, count)| LabeledCount { label: label(k), count }).collect()
}

/// Weekday × hour pivot of message counts
///
/// Always seven rows (Monday..Sunday). Columns cover the hours present in the selection.
pub fn activity_heatmap(messages: &[&Message]) -> ActivityHeatmap {
    let hours: BTreeSet<u32> = messages.iter().map(|m| m.calendar.hour).collect();
    let mut cells_by_key: HashMap<(u32, u32), u64> = HashMap::new();
    for message in messages {
        let key = (message.calendar.weekday.num_days_from_monday(), message.calendar.hour);
        *cells_by_key.entry(key).or_default() += 1;
    }

    let cells: Vec<Vec<u64>> = WEEKDAYS
        .iter()
        .map(|weekday| {
            let row = weekday.num_days_from_monday();
            hours.iter().map(|&hour| cells_by_key.get(&(row, hour)).copied().unwrap_or(0)).collect::<Vec<_>>()
        })
        .collect();

    ActivityHeatmap {
        rows: WEEKDAYS.iter().map(|&w| weekday_name(w).to_string()).collect(),
        columns: hours.iter().map(|&h| hour_label(h)).collect(),
        cells,
    }
}

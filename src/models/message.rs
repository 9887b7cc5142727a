use std::fmt;

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

/// Sender assigned to service lines that carry no `sender: text` prefix
pub const SYSTEM_SENDER: &str = "Whatsapp";

/// Body WhatsApp writes in place of attachments when exporting without media
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 { Meridiem::Am } else { Meridiem::Pm }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar fields derived from a message timestamp
///
/// Computed once when the message is parsed so aggregations never re-derive them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    pub date: NaiveDate,
    pub year: i32,
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    pub day: u32,
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

impl CalendarFields {
    pub fn from_timestamp(timestamp: &NaiveDateTime) -> Self {
        let date = timestamp.date();
        let hour = timestamp.hour();
        Self {
            date,
            year: date.year(),
            // month() is always 1..=12
            month: Month::try_from(date.month() as u8).unwrap_or(Month::January),
            day: date.day(),
            weekday: date.weekday(),
            hour,
            minute: timestamp.minute(),
            meridiem: Meridiem::from_hour(hour),
        }
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// Full English weekday name ("Monday"), matching the export's locale
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Hour label on the 12-hour clock, e.g. `"9 AM"`, `"12 PM"`
pub fn hour_label(hour: u32) -> String {
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", hour12, Meridiem::from_hour(hour))
}

fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

fn serialize_weekday<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*weekday))
}

/// A single chat message parsed from a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub sender: String,
    pub timestamp: NaiveDateTime,
    pub text: String,
    pub calendar: CalendarFields,
}

impl Message {
    pub fn new(sender: impl Into<String>, timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            calendar: CalendarFields::from_timestamp(&timestamp),
            timestamp,
            text: text.into(),
        }
    }

    pub fn is_media(&self) -> bool {
        self.text == MEDIA_PLACEHOLDER
    }

    pub fn is_system(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }
}

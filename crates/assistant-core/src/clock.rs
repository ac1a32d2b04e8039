//! Timestamp Formatting
//!
//! The renderer never formats times itself; it asks a [`TimestampFormat`].

use std::fmt::Display;

use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, TimeZone, Utc};

/// Turns a message timestamp into display text
pub trait TimestampFormat {
    fn format(&self, timestamp: &DateTime<Utc>) -> String;
}

/// Clock-style times relative to the current day.
///
/// Today: `3:05 PM`. Earlier this year: `Oct 18, 3:05 PM`. Other years:
/// `Oct 18, 2024, 3:05 PM`. Future times are formatted the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortTime {
    zone: Zone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Fixed(FixedOffset),
    /// Offset looked up per timestamp
    Local,
}

impl ShortTime {
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            zone: Zone::Fixed(offset),
        }
    }

    pub fn utc() -> Self {
        Self::with_offset(Utc.fix())
    }

    /// The viewer's local time zone
    pub fn local() -> Self {
        Self { zone: Zone::Local }
    }

    /// Format relative to an explicit "now"
    pub fn format_at(&self, timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
        match self.zone {
            Zone::Fixed(offset) => {
                format_in(&timestamp.with_timezone(&offset), &now.with_timezone(&offset))
            }
            Zone::Local => format_in(&timestamp.with_timezone(&Local), &now.with_timezone(&Local)),
        }
    }
}

fn format_in<Tz>(ts: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if ts.date_naive() == now.date_naive() {
        ts.format("%-I:%M %p").to_string()
    } else if ts.year() == now.year() {
        ts.format("%b %-d, %-I:%M %p").to_string()
    } else {
        ts.format("%b %-d, %Y, %-I:%M %p").to_string()
    }
}

impl Default for ShortTime {
    fn default() -> Self {
        Self::utc()
    }
}

impl TimestampFormat for ShortTime {
    fn format(&self, timestamp: &DateTime<Utc>) -> String {
        self.format_at(timestamp, &Utc::now())
    }
}

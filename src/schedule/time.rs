use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const LOCAL_ZONE: &str = "local";

const DATETIME_MED: &str = "%b %-d, %Y, %-I:%M %p";
const TIME_SIMPLE: &str = "%-I:%M %p";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("unknown time zone: {0}")]
    Unknown(String),
}

/// Zone override times are displayed in: the host's zone or an IANA zone.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TimeZoneParam {
    #[default]
    Local,
    Named(Tz),
}

impl TimeZoneParam {
    /// Parses a zone name, falling back to the local zone for names chrono-tz
    /// does not know.
    pub fn parse_or_local(name: &str) -> Self {
        match name.parse() {
            Ok(zone) => zone,
            Err(e) => {
                tracing::warn!(event = "config.zone_fallback", zone = name, error = %e);
                TimeZoneParam::Local
            }
        }
    }
}

impl FromStr for TimeZoneParam {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(LOCAL_ZONE) {
            return Ok(TimeZoneParam::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(TimeZoneParam::Named)
            .map_err(|_| ZoneError::Unknown(trimmed.to_string()))
    }
}

impl fmt::Display for TimeZoneParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneParam::Local => f.write_str(LOCAL_ZONE),
            TimeZoneParam::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Renders an override window, e.g. `Jan 1, 2024, 9:00 AM to 5:00 PM`.
/// The end drops its date when it falls on the same day as the start.
pub fn format_override_time(start: DateTime<Utc>, end: DateTime<Utc>, zone: TimeZoneParam) -> String {
    match zone {
        TimeZoneParam::Local => format_range(&Local, start, end),
        TimeZoneParam::Named(tz) => format_range(&tz, start, end),
    }
}

fn format_range<Z>(zone: &Z, start: DateTime<Utc>, end: DateTime<Utc>) -> String
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    let start = start.with_timezone(zone);
    let end = end.with_timezone(zone);
    let end_format = if start.date_naive() == end.date_naive() {
        TIME_SIMPLE
    } else {
        DATETIME_MED
    };
    format!(
        "{} to {}",
        start.format(DATETIME_MED),
        end.format(end_format)
    )
}

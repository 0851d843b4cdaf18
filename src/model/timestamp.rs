use chrono::prelude::*;
use chrono::LocalResult;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;

// Unix timestamp in whole seconds; sadf exports carry no sub-second part.
pub type Timestamp = i64;

pub trait TimestampTrait {
    fn to_nanos_string(&self) -> String;
}

impl TimestampTrait for Timestamp {
    /// Second resolution rendered on the nanosecond scale, as the line
    /// protocol expects.
    fn to_nanos_string(&self) -> String {
        format!("{}000000000", self)
    }
}

/// Parses a sadf timestamp cell, `YYYY-MM-DD HH:MM:SS <timezone-name>`.
///
/// The timezone name must be present but is otherwise ignored: the wall time
/// is interpreted in the local timezone, like the mktime(3) conversion the
/// exports were written for.
pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) \S+$").unwrap();
    }

    let caps = RE
        .captures(s)
        .ok_or(format!("malformed timestamp {:?}", s))?;

    let wall_time = NaiveDateTime::parse_from_str(&caps[1], "%Y-%m-%d %H:%M:%S")
        .map_err(|e| (format!("couldn't parse timestamp {:?}", s), e))?;

    match Local.from_local_datetime(&wall_time) {
        LocalResult::Single(t) => Ok(t.timestamp()),
        // DST fold: both instants are valid wall times, take the earlier one.
        LocalResult::Ambiguous(t, _) => Ok(t.timestamp()),
        LocalResult::None => {
            Err(format!("timestamp {:?} doesn't exist in the local timezone", s).into())
        }
    }
}

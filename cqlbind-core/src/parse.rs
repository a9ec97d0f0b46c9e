//! Text forms of the temporal types.
//!
//! Dates are `YYYY-MM-DD`, times `HH:MM[:SS[.fraction]]`. Timestamps join
//! the two with `T` or a space and may end with `Z` or a `+HH[:MM]` offset.
use crate::Result;
use anyhow::Context;
use std::borrow::Cow;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, macros::format_description};

pub fn parse_date(text: &str) -> Result<Date> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("`{text}` is not a date"))
}

pub fn parse_time(text: &str) -> Result<Time> {
    Time::parse(
        text.trim(),
        format_description!("[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
    )
    .with_context(|| format!("`{text}` is not a time"))
}

/// Timestamp without offset, fails if one is present.
pub fn parse_local_timestamp(text: &str) -> Result<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        &space_separated(text.trim()),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
        ),
    )
    .with_context(|| format!("`{text}` is not a timestamp"))
}

/// Timestamp with an explicit offset, `Z` meaning UTC.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime> {
    let trimmed = text.trim();
    if let Some(local) = trimmed.strip_suffix(|c: char| c.eq_ignore_ascii_case(&'z')) {
        return Ok(parse_local_timestamp(local)?.assume_utc());
    }
    OffsetDateTime::parse(
        &space_separated(trimmed),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]][offset_hour sign:mandatory][optional [:[offset_minute]]]"
        ),
    )
    .with_context(|| format!("`{text}` is not a timestamp with offset"))
}

fn space_separated(text: &str) -> Cow<'_, str> {
    // Byte 10 is the date/time separator, ASCII so both slices are on char boundaries
    match text.as_bytes().get(10) {
        Some(b'T' | b't') => Cow::Owned(format!("{} {}", &text[..10], &text[11..])),
        _ => Cow::Borrowed(text),
    }
}

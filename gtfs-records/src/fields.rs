//! Decoders for the GTFS field formats that serde does not know about
use chrono::NaiveDate;
use rgb::RGB8;
use serde::de::{Deserialize, Deserializer, Error};

pub(crate) fn date<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
    let raw = <&str>::deserialize(de)?;
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map_err(|_| D::Error::custom(format!("'{}' is not a YYYYMMDD date", raw)))
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    match <&str>::deserialize(de)? {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(D::Error::custom(format!("'{}' is neither 0 nor 1", other))),
    }
}

pub(crate) fn optional_time<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u32>, D::Error> {
    match Option::<&str>::deserialize(de)? {
        None | Some("") => Ok(None),
        Some(raw) => seconds_since_midnight(raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("'{}' is not a HH:MM:SS time", raw))),
    }
}

/// `H:MM:SS` or `HH:MM:SS`, hours go past 24 for trips running after midnight
pub(crate) fn seconds_since_midnight(raw: &str) -> Option<u32> {
    let number = |part: &str| -> Option<u32> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };
    let mut parts = raw.split(':');
    let hours = number(parts.next()?)?;
    let (minutes, seconds) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(s), None) if m.len() == 2 && s.len() == 2 => (number(m)?, number(s)?),
        _ => return None,
    };
    if minutes >= 60 || seconds >= 60 {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// `RRGGBB`, without a leading `#`
pub(crate) fn hex_color(raw: &str) -> Option<RGB8> {
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(raw, 16).ok()?;
    Some(RGB8::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

fn color_or<'de, D: Deserializer<'de>>(de: D, empty: RGB8) -> Result<RGB8, D::Error> {
    let raw = <&str>::deserialize(de)?;
    if raw.is_empty() {
        return Ok(empty);
    }
    hex_color(raw).ok_or_else(|| D::Error::custom(format!("'{}' is not a RRGGBB color", raw)))
}

pub(crate) fn white() -> RGB8 {
    RGB8::new(255, 255, 255)
}

pub(crate) fn route_color<'de, D: Deserializer<'de>>(de: D) -> Result<RGB8, D::Error> {
    color_or(de, white())
}

pub(crate) fn route_text_color<'de, D: Deserializer<'de>>(de: D) -> Result<RGB8, D::Error> {
    color_or(de, RGB8::default())
}

use std::{ops::Deref, str::FromStr};

use serde::Deserialize;

/// A human readable duration like `30s` or `1h 30m`.
///
/// Every whitespace separated part is a whole number followed by one of the units `s`, `m`, `h`
/// or `d`. The parts are added up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |total, part| {
                let unit_at = part
                    .find(|c: char| !c.is_ascii_digit())
                    .ok_or_else(|| format!("Missing unit in {part:?}"))?;
                let (value, unit) = part.split_at(unit_at);
                let value = value
                    .parse::<u64>()
                    .map_err(|_| format!("Missing value in {part:?}"))?;
                let scale = match unit {
                    "s" => 1,
                    "m" => 60,
                    "h" => 60 * 60,
                    "d" => 24 * 60 * 60,
                    _ => return Err(format!("Unknown unit {unit:?}")),
                };
                value
                    .checked_mul(scale)
                    .map(std::time::Duration::from_secs)
                    .and_then(|part| total.checked_add(part))
                    .ok_or_else(|| format!("Duration {s:?} is too long"))
            })
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

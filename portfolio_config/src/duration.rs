use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

static PART_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)([smhd])$").unwrap());

/// A human readable duration such as `"30s"` or `"1h 15m"`.
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

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.split_whitespace()
            .try_fold(0u64, |total, part| {
                let seconds = parse_part(part).ok_or_else(|| {
                    serde::de::Error::custom(format!("Invalid duration {part:?} in {s:?}"))
                })?;
                total
                    .checked_add(seconds)
                    .ok_or_else(|| serde::de::Error::custom("Duration is too long"))
            })
            .map(|seconds| Self(std::time::Duration::from_secs(seconds)))
    }
}

fn parse_part(part: &str) -> Option<u64> {
    let captures = PART_REGEX.captures(part)?;
    let value = captures[1].parse::<u64>().ok()?;
    let unit = match &captures[2] {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return None,
    };
    value.checked_mul(unit)
}

use std::str::FromStr;

use portfolio_models::content::{parse_filter, UnknownVariant};

pub mod content;

/// Parses an optional keyword query parameter. A missing parameter does not
/// filter.
pub fn parse_keyword<T>(value: Option<&str>) -> Result<Option<T>, UnknownVariant>
where
    T: FromStr<Err = UnknownVariant>,
{
    value.map_or(Ok(None), parse_filter)
}

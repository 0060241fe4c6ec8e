//! Parsing dropdown values from user input.

use std::str::FromStr;

use folio_types::{Choice, NicheCategory, Timeframe};

use crate::{MarketError, Result};

/// Parse an "all"-or-variant selector.
pub fn parse_choice<T: FromStr>(kind: &'static str, value: &str) -> Result<Choice<T>> {
    value
        .parse::<Choice<T>>()
        .map_err(|_| MarketError::UnknownSelector {
            kind,
            value: value.to_string(),
        })
}

pub fn parse_niche(value: &str) -> Result<NicheCategory> {
    NicheCategory::from_str(value.trim()).ok_or_else(|| MarketError::UnknownSelector {
        kind: "niche",
        value: value.to_string(),
    })
}

pub fn parse_timeframe(value: &str) -> Result<Timeframe> {
    Timeframe::from_str(value.trim()).ok_or_else(|| MarketError::UnknownSelector {
        kind: "timeframe",
        value: value.to_string(),
    })
}

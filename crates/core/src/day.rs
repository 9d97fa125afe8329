//! Calendar day used to key the sales ledger.

use core::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// A local calendar day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SaleDay(NaiveDate);

impl SaleDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("invalid date {year}-{month}-{day}")))
    }

    /// Today's date on the local calendar.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for SaleDay {}

impl core::fmt::Display for SaleDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for SaleDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields; the store format is always zero-padded.
        if s.len() != 10 {
            return Err(DomainError::validation(format!(
                "invalid sale day '{s}': expected YYYY-MM-DD"
            )));
        }
        NaiveDate::parse_from_str(s, DAY_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::validation(format!("invalid sale day '{s}': {e}")))
    }
}

impl TryFrom<String> for SaleDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SaleDay> for String {
    fn from(value: SaleDay) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_iso_days() {
        let day: SaleDay = "2024-03-07".parse().unwrap();
        assert_eq!(day, SaleDay::from_ymd(2024, 3, 7).unwrap());
        assert_eq!(day.to_string(), "2024-03-07");
    }

    #[test]
    fn rejects_malformed_days() {
        assert!("2024-3-7".parse::<SaleDay>().is_err());
        assert!("2024-02-30".parse::<SaleDay>().is_err());
        assert!("yesterday".parse::<SaleDay>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a = SaleDay::from_ymd(2023, 12, 31).unwrap();
        let b = SaleDay::from_ymd(2024, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn works_as_json_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(SaleDay::from_ymd(2024, 1, 2).unwrap(), 1u32);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2024-01-02":1}"#);
        let back: std::collections::BTreeMap<SaleDay, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}

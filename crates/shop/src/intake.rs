//! Parsing of `YYYY-MM-DD;Customer Name;DESCRIPTOR` order lines.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{Result, ServiceError};

/// One order read from the intake stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub date: NaiveDate,
    pub customer: String,
    pub descriptor: String,
}

impl OrderLine {
    /// Parses a raw intake line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl FromStr for OrderLine {
    type Err = ServiceError;

    fn from_str(line: &str) -> Result<Self> {
        let invalid = |reason| ServiceError::InvalidOrderLine {
            line: line.to_string(),
            reason,
        };

        let mut fields = line.splitn(3, ';');
        let (Some(date), Some(customer), Some(descriptor)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid("expected date;customer;descriptor"));
        };

        let customer = customer.trim();
        if customer.is_empty() {
            return Err(invalid("missing customer name"));
        }

        Ok(Self {
            date: NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?,
            customer: customer.to_string(),
            descriptor: descriptor.trim().to_string(),
        })
    }
}

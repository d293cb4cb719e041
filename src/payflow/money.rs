use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Money parse error: {0}, {1}")]
    Parse(&'static str, String),
}

/// A transaction amount in minor units (cents), as sent in the AMT field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub i64);

impl Money {
    pub fn parse(string: String) -> Result<Self> {
        if string.starts_with('-') {
            Err(MoneyError::Parse("Negative amounts not supported", string.clone()))?
        }

        let str_to_split = string.clone();
        let mut parts = str_to_split.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.clone()))?
        }

        let dollars = match parts.next() {
            None => return Ok(Money(0)),
            Some(dollars) => dollars,
        };

        let cents = match parts.next() {
            None => "00".to_string(),
            Some(cents) => {
                if cents.len() > 2 {
                    Err(MoneyError::Parse("Too many decimal places", string.clone()))?
                }

                format!("{:0<2}", cents)
            }
        };

        let dollars: i64 = dollars.parse()?;
        let cents: i64 = cents.parse()?;

        return Ok(Money((dollars * 100) + cents));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}.{:02}", self.0 / 100, self.0 % 100);
    }
}

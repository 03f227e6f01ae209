use std::fmt;
use std::str::FromStr;

use crate::state::dataset::Value;
use crate::state::error::FilterError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperator {
    Gt,
    Lt,
    GtEq,
    LtEq,
    Eq,
}

impl FilterOperator {
    pub fn all() -> &'static [Self] {
        &[Self::Gt, Self::Lt, Self::GtEq, Self::LtEq, Self::Eq]
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::Eq => "==",
        }
    }

    pub fn apply(self, left: f64, right: f64) -> bool {
        match self {
            Self::Gt => left > right,
            Self::Lt => left < right,
            Self::GtEq => left >= right,
            Self::LtEq => left <= right,
            Self::Eq => left == right,
        }
    }
}

impl FromStr for FilterOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|op| op.symbol() == trimmed)
            .ok_or_else(|| FilterError::InvalidOperator(trimmed.to_string()))
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `column <op> threshold` over a numeric column.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterPredicate {
    pub column: String,
    pub operator: FilterOperator,
    pub threshold: f64,
}

impl FilterPredicate {
    /// Non-numeric and missing values never match.
    pub fn matches(&self, value: &Value) -> bool {
        value
            .as_f64()
            .map(|v| self.operator.apply(v, self.threshold))
            .unwrap_or(false)
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.threshold)
    }
}

pub fn parse_threshold(text: &str) -> Result<f64, FilterError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| FilterError::InvalidValue(trimmed.to_string()))
}

//! Tagged statistic values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a statistic has no value for a given series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// The series has no values
    EmptySeries,
    /// Fewer than two values (sample variance and standard deviation)
    InsufficientData,
    /// A value is zero or negative (geometric mean)
    NonPositiveValues,
    /// A value is zero (harmonic mean)
    ZeroValue,
    /// Every value occurs exactly once
    NoUniqueMode,
    /// The computation overflowed or divided by zero
    NonFinite,
}

impl UndefinedReason {
    /// Human-readable explanation, shown in place of the value
    pub fn message(&self) -> &'static str {
        match self {
            UndefinedReason::EmptySeries => "no values",
            UndefinedReason::InsufficientData => "requires at least two values",
            UndefinedReason::NonPositiveValues => "requires strictly positive values",
            UndefinedReason::ZeroValue => "requires nonzero values",
            UndefinedReason::NoUniqueMode => "no unique mode",
            UndefinedReason::NonFinite => "result is not finite",
        }
    }
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single descriptive statistic: a finite number or an explained absence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Value(f64),
    Undefined(UndefinedReason),
}

impl Statistic {
    /// Wrap a computed number, demoting NaN and infinities to `NonFinite`
    pub fn finite(value: f64) -> Self {
        if value.is_finite() {
            Statistic::Value(value)
        } else {
            Statistic::Undefined(UndefinedReason::NonFinite)
        }
    }

    pub fn undefined(reason: UndefinedReason) -> Self {
        Statistic::Undefined(reason)
    }

    /// The value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Statistic::Value(v) => Some(*v),
            Statistic::Undefined(_) => None,
        }
    }

    /// The reason, if undefined
    pub fn reason(&self) -> Option<UndefinedReason> {
        match self {
            Statistic::Value(_) => None,
            Statistic::Undefined(reason) => Some(*reason),
        }
    }

    /// Apply `f` to a defined value, keeping the result finite
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Statistic::Value(v) => Statistic::finite(f(v)),
            undefined => undefined,
        }
    }

    /// Render with a fixed number of decimals, or the reason text
    pub fn format(&self, precision: usize) -> String {
        match self {
            Statistic::Value(v) => format!("{:.*}", precision, v),
            Statistic::Undefined(reason) => reason.to_string(),
        }
    }
}

impl From<UndefinedReason> for Statistic {
    fn from(reason: UndefinedReason) -> Self {
        Statistic::Undefined(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_guard() {
        assert_eq!(Statistic::finite(1.5), Statistic::Value(1.5));
        assert_eq!(
            Statistic::finite(f64::INFINITY),
            Statistic::Undefined(UndefinedReason::NonFinite)
        );
        assert_eq!(
            Statistic::finite(f64::NAN).reason(),
            Some(UndefinedReason::NonFinite)
        );
    }

    #[test]
    fn test_map_preserves_undefined() {
        let undefined = Statistic::undefined(UndefinedReason::InsufficientData);
        assert_eq!(undefined.map(f64::sqrt), undefined);
        assert_eq!(Statistic::Value(4.0).map(f64::sqrt), Statistic::Value(2.0));
    }

    #[test]
    fn test_format() {
        assert_eq!(Statistic::Value(21.6).format(2), "21.60");
        assert_eq!(
            Statistic::undefined(UndefinedReason::ZeroValue).format(2),
            "requires nonzero values"
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Statistic::Value(2.0)).unwrap();
        assert_eq!(json, r#"{"value":2.0}"#);
        let json = serde_json::to_string(&Statistic::undefined(UndefinedReason::NoUniqueMode)).unwrap();
        assert_eq!(json, r#"{"undefined":"no_unique_mode"}"#);
    }
}

//! The fixed letter-grade scale and its quality-point weights.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::IpsError;

/// A letter grade from the fixed scale.
///
/// The scale is closed: any token outside it is invalid input. Parsing goes
/// through [`Grade::parse`], which normalizes case and whitespace first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Grade {
    /// 4.0 quality points.
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    A,
    /// 3.75 quality points.
    #[strum(serialize = "A-")]
    #[serde(rename = "A-")]
    AMinus,
    /// 3.5 quality points.
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    /// 3.0 quality points.
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    B,
    /// 2.75 quality points.
    #[strum(serialize = "B-")]
    #[serde(rename = "B-")]
    BMinus,
    /// 2.5 quality points.
    #[strum(serialize = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    /// 2.0 quality points.
    #[strum(serialize = "C")]
    #[serde(rename = "C")]
    C,
    /// 1.0 quality points.
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    D,
    /// 0.0 quality points.
    #[strum(serialize = "E")]
    #[serde(rename = "E")]
    E,
}

impl Grade {
    /// Quality-point weight of this grade.
    pub fn weight(&self) -> Decimal {
        match self {
            Grade::A => dec!(4.0),
            Grade::AMinus => dec!(3.75),
            Grade::BPlus => dec!(3.5),
            Grade::B => dec!(3.0),
            Grade::BMinus => dec!(2.75),
            Grade::CPlus => dec!(2.5),
            Grade::C => dec!(2.0),
            Grade::D => dec!(1.0),
            Grade::E => dec!(0.0),
        }
    }

    /// Parse a raw grade token, trimming whitespace and uppercasing first.
    ///
    /// Unknown tokens fail with [`IpsError::InvalidGrade`] naming the token
    /// and the accepted set.
    pub fn parse(raw: &str) -> Result<Self, IpsError> {
        let token = raw.trim().to_uppercase();
        token.parse::<Grade>().map_err(|_| IpsError::InvalidGrade {
            token,
            accepted: Self::accepted_tokens(),
        })
    }

    /// The accepted tokens as a display string, in scale order.
    pub fn accepted_tokens() -> String {
        Grade::iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

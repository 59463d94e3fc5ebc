//! Money - Decimal amount in a single currency

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount tagged with an ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency_code: String,
    #[cfg_attr(feature = "utoipa", schema(value_type = String))]
    pub amount: Decimal,
}

impl Money {
    pub fn of(currency_code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            amount,
        }
    }

    /// Sum raw amounts into a Money of the given currency
    pub fn sum<'a, I>(currency_code: &str, amounts: I) -> Money
    where
        I: IntoIterator<Item = &'a Decimal>,
    {
        let total = amounts.into_iter().fold(Decimal::ZERO, |acc, a| acc + *a);
        Money::of(currency_code, total)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency_code, self.amount)
    }
}

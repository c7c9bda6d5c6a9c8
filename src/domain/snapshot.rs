//! State snapshot fetched from the state provider.
//!
//! The shape mirrors the provider's JSON document. Equality is structural:
//! two snapshots are equal iff every field matches, which is what change
//! detection relies on.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fetched copy of the remote currency and bot configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub dollar_model: DollarModel,
    pub currency_model: CurrencyModel,
    pub bot_model: BotBehavior,
}

impl StateSnapshot {
    /// Current dollar reference price.
    #[must_use]
    pub fn dollar_price(&self) -> Decimal {
        self.dollar_model.current_price.price
    }

    /// Bot behavior descriptor embedded in this snapshot.
    #[must_use]
    pub fn behavior(&self) -> &BotBehavior {
        &self.bot_model
    }

    /// Find the rate record for a currency code.
    #[must_use]
    pub fn rate_for(&self, code: &str) -> Option<&CurrencyRate> {
        self.currency_model
            .currency_rates
            .iter()
            .find(|r| r.currency_code == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DollarModel {
    pub current_price: DollarPrice,
    #[serde(default)]
    pub historic_prices: Vec<DollarPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DollarPrice {
    pub price: Decimal,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyModel {
    /// Codes marked for display, in display order.
    pub selected_currencies: Vec<String>,
    pub currency_rates: Vec<CurrencyRate>,
}

/// Exchange rate record for a single currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
    pub alias_name: String,
    pub rate: Decimal,
    #[serde(default)]
    pub has_manual_rate: bool,
    #[serde(default)]
    pub manual_rate: Decimal,
    #[serde(default)]
    pub adjustment: Decimal,
}

impl CurrencyRate {
    /// Manual rate when the operator set one, the computed rate otherwise.
    #[must_use]
    pub fn effective_rate(&self) -> Decimal {
        if self.has_manual_rate {
            self.manual_rate
        } else {
            self.rate
        }
    }
}

/// How the bot should broadcast, as configured remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotBehavior {
    #[serde(default)]
    pub disabled: bool,
    #[serde(rename = "onChange", default)]
    pub on_change: bool,
    #[serde(rename = "onTime", default)]
    pub on_interval: bool,
    pub interval: Interval,
}

/// Send interval for the interval schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub unit: IntervalUnit,
    pub value: u32,
}

impl Interval {
    #[must_use]
    pub fn new(unit: IntervalUnit, value: u32) -> Self {
        Self { unit, value }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {} {}", self.value, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalUnit {
    #[serde(rename = "Min", alias = "Minute")]
    Minute,
    Hour,
    Day,
    /// Any unit string the scheduler does not understand.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minute => "min",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

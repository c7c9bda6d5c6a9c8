//! Builders for snapshots used across tests.

use rust_decimal::Decimal;

use crate::domain::{
    BotBehavior, CurrencyModel, CurrencyRate, DollarModel, DollarPrice, Interval, IntervalUnit,
    StateSnapshot,
};

/// Fluent builder for [`StateSnapshot`].
///
/// Defaults: dollar price 100, no currencies, on-change sending enabled,
/// interval of one minute.
pub struct SnapshotBuilder {
    snapshot: StateSnapshot,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: StateSnapshot {
                dollar_model: DollarModel {
                    current_price: DollarPrice {
                        price: Decimal::from(100),
                        timestamp: None,
                    },
                    historic_prices: vec![],
                },
                currency_model: CurrencyModel {
                    selected_currencies: vec![],
                    currency_rates: vec![],
                },
                bot_model: BotBehavior {
                    disabled: false,
                    on_change: true,
                    on_interval: false,
                    interval: Interval::new(IntervalUnit::Minute, 1),
                },
            },
        }
    }

    pub fn dollar(mut self, price: Decimal) -> Self {
        self.snapshot.dollar_model.current_price.price = price;
        self
    }

    /// Add a selected currency whose alias equals its code.
    pub fn currency(self, code: &str, rate: Decimal) -> Self {
        self.currency_with(code, code, rate, Decimal::ZERO)
    }

    /// Add a selected currency with alias and adjustment.
    pub fn currency_with(
        mut self,
        code: &str,
        alias: &str,
        rate: Decimal,
        adjustment: Decimal,
    ) -> Self {
        self.snapshot.currency_model.currency_rates.push(rate_record(code, alias, rate, adjustment));
        self.snapshot
            .currency_model
            .selected_currencies
            .push(code.to_string());
        self
    }

    /// Select a code without adding a rate for it.
    pub fn select(mut self, code: &str) -> Self {
        self.snapshot
            .currency_model
            .selected_currencies
            .push(code.to_string());
        self
    }

    pub fn on_change(mut self) -> Self {
        self.snapshot.bot_model.on_change = true;
        self.snapshot.bot_model.on_interval = false;
        self
    }

    pub fn on_interval(mut self, unit: IntervalUnit, value: u32) -> Self {
        self.snapshot.bot_model.on_change = false;
        self.snapshot.bot_model.on_interval = true;
        self.snapshot.bot_model.interval = Interval::new(unit, value);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.snapshot.bot_model.disabled = true;
        self
    }

    /// Neither on-change nor on-interval sending.
    pub fn idle(mut self) -> Self {
        self.snapshot.bot_model.on_change = false;
        self.snapshot.bot_model.on_interval = false;
        self
    }

    pub fn build(self) -> StateSnapshot {
        self.snapshot
    }
}

/// A rate record with no manual override.
pub fn rate_record(code: &str, alias: &str, rate: Decimal, adjustment: Decimal) -> CurrencyRate {
    CurrencyRate {
        uid: None,
        currency_code: code.to_string(),
        alias_name: alias.to_string(),
        rate,
        has_manual_rate: false,
        manual_rate: Decimal::ZERO,
        adjustment,
    }
}

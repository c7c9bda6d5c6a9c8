//! Display prices derived from a snapshot.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use super::snapshot::{CurrencyRate, StateSnapshot};

/// Ordered mapping of display alias to integer price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceBoard {
    entries: Vec<PricedEntry>,
}

/// A single display line before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedEntry {
    pub alias: String,
    pub price: i64,
}

impl PriceBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a price. An existing alias keeps its position and takes the
    /// new price.
    pub fn insert(&mut self, alias: impl Into<String>, price: i64) {
        let alias = alias.into();
        match self.entries.iter_mut().find(|e| e.alias == alias) {
            Some(entry) => entry.price = price,
            None => self.entries.push(PricedEntry { alias, price }),
        }
    }

    #[must_use]
    pub fn get(&self, alias: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.alias == alias)
            .map(|e| e.price)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricedEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for PriceBoard {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut board = Self::new();
        for (alias, price) in iter {
            board.insert(alias, price);
        }
        board
    }
}

/// Price of one currency in dollar-price units, truncated toward zero.
///
/// `trunc(effective_rate * dollar_price + adjustment)`. Values beyond `i64`
/// saturate.
#[must_use]
pub fn final_price(rate: &CurrencyRate, dollar_price: Decimal) -> i64 {
    let value = rate
        .effective_rate()
        .saturating_mul(dollar_price)
        .saturating_add(rate.adjustment)
        .trunc();

    value.to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Build the price board for every selected currency, in selection order.
///
/// Selected codes without a rate record are skipped.
#[must_use]
pub fn price_board(snapshot: &StateSnapshot) -> PriceBoard {
    let dollar_price = snapshot.dollar_price();
    let mut board = PriceBoard::new();
    let mut seen: Vec<&str> = Vec::new();

    for code in &snapshot.currency_model.selected_currencies {
        if seen.contains(&code.as_str()) {
            continue;
        }
        seen.push(code.as_str());

        match snapshot.rate_for(code) {
            Some(rate) => board.insert(rate.alias_name.clone(), final_price(rate, dollar_price)),
            None => debug!(code = %code, "Selected currency has no rate, skipping"),
        }
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::{
        BotBehavior, CurrencyModel, DollarModel, DollarPrice, Interval, IntervalUnit,
    };
    use rust_decimal_macros::dec;

    fn rate(code: &str, alias: &str, rate: Decimal, adjustment: Decimal) -> CurrencyRate {
        CurrencyRate {
            uid: None,
            currency_code: code.into(),
            alias_name: alias.into(),
            rate,
            has_manual_rate: false,
            manual_rate: Decimal::ZERO,
            adjustment,
        }
    }

    fn snapshot(dollar: Decimal, selected: &[&str], rates: Vec<CurrencyRate>) -> StateSnapshot {
        StateSnapshot {
            dollar_model: DollarModel {
                current_price: DollarPrice {
                    price: dollar,
                    timestamp: None,
                },
                historic_prices: vec![],
            },
            currency_model: CurrencyModel {
                selected_currencies: selected.iter().map(|s| s.to_string()).collect(),
                currency_rates: rates,
            },
            bot_model: BotBehavior {
                disabled: false,
                on_change: true,
                on_interval: false,
                interval: Interval::new(IntervalUnit::Minute, 1),
            },
        }
    }

    #[test]
    fn final_price_applies_rate_and_adjustment() {
        let usd = rate("USD", "USD", dec!(3.5), dec!(2));
        assert_eq!(final_price(&usd, dec!(100)), 352);
    }

    #[test]
    fn final_price_prefers_manual_rate() {
        let mut lira = rate("TRY", "Lira", dec!(19.01), dec!(-200));
        lira.has_manual_rate = true;
        lira.manual_rate = dec!(19.5);

        // 19.5 * 48285 - 200 = 941357.5
        assert_eq!(final_price(&lira, dec!(48285)), 941_357);
    }

    #[test]
    fn final_price_truncates_toward_zero() {
        let pos = rate("A", "A", dec!(1.99), Decimal::ZERO);
        assert_eq!(final_price(&pos, dec!(1)), 1);

        let neg = rate("B", "B", dec!(0.5), dec!(-200));
        // 0.5 - 200 = -199.5
        assert_eq!(final_price(&neg, dec!(1)), -199);
    }

    #[test]
    fn final_price_is_exact_for_decimal_rates() {
        // 1.05 * 48285 + 500 = 51199.25 with no float drift
        let eur = rate("EUR", "Euro", dec!(1.05), dec!(500));
        assert_eq!(final_price(&eur, dec!(48285)), 51_199);
    }

    #[test]
    fn board_skips_selected_codes_without_rate() {
        let snap = snapshot(
            dec!(100),
            &["USD", "GBP"],
            vec![rate("USD", "Dollar", dec!(1), Decimal::ZERO)],
        );

        let board = price_board(&snap);
        assert_eq!(board.len(), 1);
        assert_eq!(board.get("Dollar"), Some(100));
        assert_eq!(board.get("GBP"), None);
    }

    #[test]
    fn board_follows_selection_order() {
        let snap = snapshot(
            dec!(10),
            &["TRY", "EUR"],
            vec![
                rate("EUR", "Euro", dec!(1), Decimal::ZERO),
                rate("TRY", "Lira", dec!(2), Decimal::ZERO),
            ],
        );

        let aliases: Vec<_> = price_board(&snap).iter().map(|e| e.alias.clone()).collect();
        assert_eq!(aliases, vec!["Lira", "Euro"]);
    }

    #[test]
    fn board_ignores_unselected_and_duplicate_codes() {
        let snap = snapshot(
            dec!(10),
            &["EUR", "EUR"],
            vec![
                rate("EUR", "Euro", dec!(1), Decimal::ZERO),
                rate("TRY", "Lira", dec!(2), Decimal::ZERO),
            ],
        );

        let board = price_board(&snap);
        assert_eq!(board.len(), 1);
        assert_eq!(board.get("Euro"), Some(10));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut board: PriceBoard = [("A", 1), ("B", 2)].into_iter().collect();
        board.insert("A", 5);

        let entries: Vec<_> = board.iter().map(|e| (e.alias.as_str(), e.price)).collect();
        assert_eq!(entries, vec![("A", 5), ("B", 2)]);
    }
}

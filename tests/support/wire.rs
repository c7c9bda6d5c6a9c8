//! Canned state documents in the provider's JSON shape.

/// Dollar at 100 with USD selected at rate 1.05 and EUR at 0.92 + 0.5.
pub const TWO_CURRENCIES: &str = r#"{
  "dollar_model": {
    "current_price": { "price": 100, "timestamp": 1700000000 },
    "historic_prices": [{ "price": 99, "timestamp": 1699990000 }]
  },
  "currency_model": {
    "selected_currencies": ["USD", "EUR"],
    "currency_rates": [
      {
        "uid": "a1",
        "currencyCode": "USD",
        "alias_name": "Dollar",
        "rate": 1.05,
        "has_manual_rate": false,
        "manual_rate": 0,
        "adjustment": 0
      },
      {
        "uid": "b2",
        "currencyCode": "EUR",
        "alias_name": "Euro",
        "rate": "0.92",
        "has_manual_rate": false,
        "manual_rate": "0",
        "adjustment": "0.5"
      }
    ]
  },
  "bot_model": {
    "disabled": false,
    "onChange": true,
    "onTime": false,
    "interval": { "unit": "Min", "value": 1 }
  }
}"#;

/// A document whose interval unit is not one the bot understands.
pub const UNKNOWN_UNIT: &str = r#"{
  "dollar_model": { "current_price": { "price": 50000 } },
  "currency_model": {
    "selected_currencies": ["TRY"],
    "currency_rates": [
      { "currencyCode": "TRY", "alias_name": "Lira", "rate": 18.82714, "adjustment": 0 }
    ]
  },
  "bot_model": {
    "disabled": false,
    "onChange": false,
    "onTime": true,
    "interval": { "unit": "Week", "value": 1 }
  }
}"#;

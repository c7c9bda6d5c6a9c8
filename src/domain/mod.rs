//! Pricing, change detection and rendering of broadcast messages.

mod diff;
mod ids;
mod pricing;
mod render;
mod snapshot;

pub use diff::{diff_boards, ChangeDirection, Changes};
pub use ids::RecipientId;
pub use pricing::{final_price, price_board, PriceBoard, PricedEntry};
pub use render::{group_thousands, rates_message, render_board};
pub use snapshot::{
    BotBehavior, CurrencyModel, CurrencyRate, DollarModel, DollarPrice, Interval, IntervalUnit,
    StateSnapshot,
};

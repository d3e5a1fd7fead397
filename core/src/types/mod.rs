mod currency;
mod percent;
mod price;
mod trade;

pub use currency::{Currency, CurrencyAmount};
pub use percent::Percent;
pub use price::Price;
pub use trade::{QuoteSource, Trade, TradeType};

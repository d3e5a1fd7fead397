pub mod analytics;
pub mod constants;
mod error;
pub mod theme;
pub mod types;
pub mod utils;

pub use analytics::{use_analytics, use_trace, Analytics, TraceContext};
pub use constants::{BASE_URL, CHAIN_ID};
pub use error::Error;
pub use theme::{use_theme, Theme};
pub use types::{Currency, CurrencyAmount, Percent, Price, QuoteSource, Trade, TradeType};

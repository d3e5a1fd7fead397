mod advanced_swap_details;
pub mod dropdown_state;
mod gas_estimate_tooltip;
mod swap_details_dropdown;
mod trade_price;

pub use advanced_swap_details::{AdvancedSwapDetails, SwapDetailValues};
pub use gas_estimate_tooltip::GasEstimateTooltip;
pub use swap_details_dropdown::SwapDetailsDropdown;
pub use trade_price::TradePrice;

pub const BASE_URL: &str = "/ammber";

// Compile-time configuration for chain details
pub const CHAIN_ID: &'static str = if cfg!(feature = "mainnet") {
    "secret-4"
} else if cfg!(feature = "testnet") {
    "pulsar-3"
} else {
    "secretdev-1"
};

/// Slippage is in basis points. 50 = 0.5%
pub const DEFAULT_SLIPPAGE_BIPS: u16 = 50;
pub const SLIPPAGE_STORAGE_KEY: &str = "swap_slippage";

/// Price impact (in basis points) above which the details view shows a warning.
pub const PRICE_IMPACT_WARNING_BIPS: u32 = 200;

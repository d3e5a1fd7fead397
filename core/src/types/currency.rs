use crate::utils::display_token_amount;
use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

// TODO: carry a logo url so the routing row can show token icons
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub chain_id: String,
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Currency {
    pub fn new(
        chain_id: impl Into<String>,
        address: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            address: address.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// A raw integer amount of some currency, in its smallest unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub raw: Uint128,
}

impl CurrencyAmount {
    pub fn new(currency: Currency, raw: u128) -> Self {
        Self {
            currency,
            raw: Uint128::new(raw),
        }
    }

    pub fn with_raw(&self, raw: Uint128) -> Self {
        Self {
            currency: self.currency.clone(),
            raw,
        }
    }

    /// The amount scaled by the currency decimals, without the symbol.
    pub fn to_exact(&self) -> String {
        display_token_amount(self.raw.u128(), self.currency.decimals)
    }
}

impl std::fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency.symbol)
    }
}

use super::{Currency, CurrencyAmount, Percent, Price};
use crate::Error;
use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

const BIPS: u128 = 10_000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::ExactInput => "EXACT_INPUT",
            TradeType::ExactOutput => "EXACT_OUTPUT",
        }
    }
}

/// Where the quote was computed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    Client,
    RoutingApi,
}

impl QuoteSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSource::Client => "client",
            QuoteSource::RoutingApi => "routing_api",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuoteSource::Client => "Client router",
            QuoteSource::RoutingApi => "Routing API",
        }
    }
}

/// A quote computed elsewhere. Nothing in the interface mutates it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trade {
    pub trade_type: TradeType,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
    pub price_impact: Percent,
    pub quote_source: QuoteSource,
    /// Token path from input to output, inclusive.
    pub route: Vec<Currency>,
    pub gas_use_estimate_usd: Option<f64>,
    pub quote_id: Option<String>,
    pub block_number: Option<u64>,
}

impl Trade {
    pub fn execution_price(&self) -> Price {
        let base = self.input_amount.currency.clone();
        let quote = self.output_amount.currency.clone();

        if self.input_amount.raw.is_zero() {
            return Price::new(base, quote, 0.0);
        }

        let decimals_shift = base.decimals as i32 - quote.decimals as i32;
        let value = self.output_amount.raw.u128() as f64 / self.input_amount.raw.u128() as f64
            * 10f64.powi(decimals_shift);

        Price::new(base, quote, value)
    }

    /// The least output the trade can settle for under the given slippage.
    pub fn minimum_amount_out(&self, slippage: Percent) -> Result<CurrencyAmount, Error> {
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => {
                let raw = self
                    .output_amount
                    .raw
                    .checked_multiply_ratio(BIPS, BIPS + slippage.bips() as u128)?;
                Ok(self.output_amount.with_raw(raw))
            }
        }
    }

    /// The most input the trade can spend under the given slippage.
    pub fn maximum_amount_in(&self, slippage: Percent) -> Result<CurrencyAmount, Error> {
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => {
                let raw = self
                    .input_amount
                    .raw
                    .checked_multiply_ratio(BIPS + slippage.bips() as u128, BIPS)?;
                Ok(self.input_amount.with_raw(raw))
            }
        }
    }

    pub fn route_symbols(&self) -> String {
        self.route
            .iter()
            .map(|currency| currency.symbol.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sscrt() -> Currency {
        Currency::new("pulsar-3", "secret1sscrt", "sSCRT", 6)
    }

    fn seth() -> Currency {
        Currency::new("pulsar-3", "secret1seth", "sETH", 18)
    }

    fn trade(trade_type: TradeType) -> Trade {
        Trade {
            trade_type,
            input_amount: CurrencyAmount::new(sscrt(), 2_000_000),
            output_amount: CurrencyAmount::new(sscrt(), 200_000_000),
            price_impact: Percent::from_bips(35),
            quote_source: QuoteSource::Client,
            route: vec![sscrt(), sscrt()],
            gas_use_estimate_usd: Some(0.12),
            quote_id: None,
            block_number: None,
        }
    }

    #[test]
    fn execution_price_is_output_per_input() {
        let price = trade(TradeType::ExactInput).execution_price();
        assert_eq!(price.to_significant(), "100");
    }

    #[test]
    fn execution_price_accounts_for_decimals() {
        let trade = Trade {
            input_amount: CurrencyAmount::new(seth(), 1_000_000_000_000_000_000),
            output_amount: CurrencyAmount::new(sscrt(), 3_500_000_000),
            ..trade(TradeType::ExactInput)
        };
        assert_eq!(trade.execution_price().to_significant(), "3500");
    }

    #[test]
    fn zero_input_gives_zero_price() {
        let trade = Trade {
            input_amount: CurrencyAmount::new(sscrt(), 0),
            ..trade(TradeType::ExactInput)
        };
        assert_eq!(trade.execution_price().value, 0.0);
    }

    #[test]
    fn exact_input_bounds_output_only() {
        let trade = trade(TradeType::ExactInput);
        let slippage = Percent::from_bips(50);

        // 200_000_000 / 1.005
        assert_eq!(
            trade.minimum_amount_out(slippage).unwrap().raw,
            Uint128::new(199_004_975)
        );
        assert_eq!(trade.maximum_amount_in(slippage), Ok(trade.input_amount.clone()));
    }

    #[test]
    fn exact_output_bounds_input_only() {
        let trade = trade(TradeType::ExactOutput);
        let slippage = Percent::from_bips(50);

        assert_eq!(
            trade.maximum_amount_in(slippage).unwrap().raw,
            Uint128::new(2_010_000)
        );
        assert_eq!(trade.minimum_amount_out(slippage), Ok(trade.output_amount.clone()));
    }

    #[test]
    fn out_of_range_bound_is_an_error() {
        let trade = Trade {
            input_amount: CurrencyAmount::new(sscrt(), u128::MAX / 2),
            ..trade(TradeType::ExactOutput)
        };

        assert!(matches!(
            trade.maximum_amount_in(Percent::from_bips(20_000)),
            Err(Error::Math(_))
        ));
    }

    #[test]
    fn large_amounts_within_range_do_not_overflow() {
        let trade = Trade {
            output_amount: CurrencyAmount::new(sscrt(), u128::MAX / 2),
            ..trade(TradeType::ExactInput)
        };

        let minimum = trade.minimum_amount_out(Percent::from_bips(50)).unwrap();
        assert!(minimum.raw < trade.output_amount.raw);
    }

    #[test]
    fn route_joins_symbols() {
        let trade = Trade {
            route: vec![sscrt(), seth()],
            ..trade(TradeType::ExactInput)
        };
        assert_eq!(trade.route_symbols(), "sSCRT > sETH");
    }
}

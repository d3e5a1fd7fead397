use super::Currency;
use crate::utils::format_price;
use serde::{Deserialize, Serialize};

/// How many units of `quote` one unit of `base` is worth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Price {
    pub base: Currency,
    pub quote: Currency,
    pub value: f64,
}

impl Price {
    pub fn new(base: Currency, quote: Currency, value: f64) -> Self {
        Self { base, quote, value }
    }

    pub fn invert(&self) -> Self {
        let value = if self.value == 0.0 {
            0.0
        } else {
            1.0 / self.value
        };

        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            value,
        }
    }

    pub fn to_significant(&self) -> String {
        format_price(self.value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "1 {} = {} {}",
            self.base.symbol,
            self.to_significant(),
            self.quote.symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(symbol: &str) -> Currency {
        Currency::new("pulsar-3", format!("secret1{symbol}"), symbol, 6)
    }

    #[test]
    fn inverts_base_and_quote() {
        let price = Price::new(currency("SCRT"), currency("USDC"), 4.0);
        let inverted = price.invert();

        assert_eq!(inverted.base.symbol, "USDC");
        assert_eq!(inverted.quote.symbol, "SCRT");
        assert_eq!(inverted.to_string(), "1 USDC = 0.25 SCRT");
    }

    #[test]
    fn zero_price_inverts_to_zero() {
        let price = Price::new(currency("SCRT"), currency("USDC"), 0.0);
        assert_eq!(price.invert().value, 0.0);
    }
}

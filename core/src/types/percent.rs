use crate::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A percentage with basis point precision. 1 bip = 0.01%.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Percent {
    bips: u32,
}

impl Percent {
    pub const fn from_bips(bips: u32) -> Self {
        Self { bips }
    }

    pub const fn bips(&self) -> u32 {
        self.bips
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.bips / 100;
        let fraction = self.bips % 100;

        match fraction {
            0 => write!(f, "{whole}%"),
            n if n % 10 == 0 => write!(f, "{whole}.{}%", n / 10),
            n => write!(f, "{whole}.{n:02}%"),
        }
    }
}

/// Accepts `"0.5"` or `"0.5%"`. Anything finer than a basis point is rounded.
impl FromStr for Percent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let value: f64 = number.parse()?;

        if !value.is_finite() || value < 0.0 {
            return Err(Error::invalid_percent(s));
        }

        let bips = (value * 100.0).round();
        if bips > u32::MAX as f64 {
            return Err(Error::invalid_percent(s));
        }

        Ok(Self::from_bips(bips as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_compactly() {
        assert_eq!(Percent::from_bips(50).to_string(), "0.5%");
        assert_eq!(Percent::from_bips(100).to_string(), "1%");
        assert_eq!(Percent::from_bips(5).to_string(), "0.05%");
        assert_eq!(Percent::from_bips(1234).to_string(), "12.34%");
        assert_eq!(Percent::from_bips(0).to_string(), "0%");
    }

    #[test]
    fn parses_with_or_without_suffix() {
        assert_eq!("0.5".parse::<Percent>(), Ok(Percent::from_bips(50)));
        assert_eq!(" 1.25% ".parse::<Percent>(), Ok(Percent::from_bips(125)));
        assert_eq!("0.005".parse::<Percent>(), Ok(Percent::from_bips(1)));
    }

    #[test]
    fn rejects_garbage_and_negatives() {
        assert!(matches!(
            "abc".parse::<Percent>(),
            Err(Error::InvalidPercent(_))
        ));
        assert!(matches!(
            "-1".parse::<Percent>(),
            Err(Error::InvalidPercent(_))
        ));
        assert!(matches!(
            "inf".parse::<Percent>(),
            Err(Error::InvalidPercent(_))
        ));
    }
}

// The Serialize and Deserialize traits are derived to ensure that Errors can be
// transmitted to or from a server, which is necessary for them to function as Resources.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Serde Error: {0}")]
    Serde(String),

    #[error("Invalid percent: {0}")]
    InvalidPercent(String),

    #[error("Math error: {0}")]
    Math(String),
}

impl Error {
    pub fn invalid_percent(input: impl ToString) -> Self {
        let input = input.to_string();
        Error::InvalidPercent(input)
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::InvalidPercent(error.to_string())
    }
}

impl From<cosmwasm_std::CheckedMultiplyRatioError> for Error {
    fn from(error: cosmwasm_std::CheckedMultiplyRatioError) -> Self {
        Error::Math(error.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        Error::Serde(error.to_string())
    }
}

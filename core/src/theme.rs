use leptos::prelude::*;

/// Color tokens for inline styles that can't be expressed with utility classes alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub neutral1: &'static str,
    pub neutral3: &'static str,
    pub surface2: &'static str,
    pub surface3: &'static str,
    pub critical: &'static str,
}

impl Theme {
    pub const DARK: Theme = Theme {
        neutral1: "#FFFFFF",
        neutral3: "#5E5E5E",
        surface2: "#1B1B1B",
        surface3: "rgba(255, 255, 255, 0.12)",
        critical: "#FF5F52",
    };
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DARK
    }
}

/// Falls back to the dark theme when no provider is mounted.
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

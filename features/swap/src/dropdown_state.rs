//! View state for [`SwapDetailsDropdown`](crate::SwapDetailsDropdown).
//!
//! Everything the dropdown shows is a function of four inputs: whether a trade exists, the two
//! loading flags, and whether the user has expanded the panel. Keeping that mapping here means
//! it can be checked without a DOM.

use ammber_core::{
    analytics::{
        event_properties, AnalyticsEvent, BrowserEvent, InterfaceElementName, SwapEventName,
    },
    Percent, TraceContext, Trade,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsState {
    #[default]
    Collapsed,
    Expanded,
}

impl DetailsState {
    pub fn toggle(self) -> Self {
        match self {
            DetailsState::Collapsed => DetailsState::Expanded,
            DetailsState::Expanded => DetailsState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, DetailsState::Expanded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderContent {
    /// The trade's execution price, dimmed while syncing.
    Price { dimmed: bool },
    Fetching,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownView {
    pub header: HeaderContent,
    pub show_spinner: bool,
    pub show_gas_estimate: bool,
    pub arrow_open: bool,
    pub arrow_disabled: bool,
    /// The body is mounted only when there is a trade to describe.
    pub body_mounted: bool,
    pub body_open: bool,
}

impl DropdownView {
    pub fn describe(trade_present: bool, loading: bool, syncing: bool, state: DetailsState) -> Self {
        let fetching = loading || syncing;
        let expanded = state.is_expanded();

        let header = if trade_present {
            HeaderContent::Price { dimmed: syncing }
        } else if fetching {
            HeaderContent::Fetching
        } else {
            HeaderContent::Empty
        };

        Self {
            header,
            show_spinner: fetching,
            show_gas_estimate: !expanded,
            arrow_open: trade_present && expanded,
            arrow_disabled: !trade_present,
            body_mounted: trade_present,
            body_open: trade_present && expanded,
        }
    }
}

/// The event sent when the header is clicked. `state` is the state *before* the click.
pub fn header_click_event(
    trade: Option<&Trade>,
    allowed_slippage: Percent,
    trace: &TraceContext,
    state: DetailsState,
) -> AnalyticsEvent {
    AnalyticsEvent {
        name: SwapEventName::SwapDetailsExpanded,
        element: InterfaceElementName::SwapDetailsDropdown,
        browser_event: BrowserEvent::OnClick,
        properties: event_properties(trade, allowed_slippage, trace),
        // re-opening shouldn't count as another impression
        should_log_impression: !state.is_expanded(),
    }
}

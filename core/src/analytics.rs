//! Interaction events and the sinks that receive them.
//!
//! Components never talk to a backend directly. They build an [`AnalyticsEvent`] and hand it to
//! the [`Analytics`] context, which forwards it to whatever [`AnalyticsSink`] the app installed.

use crate::{types::Trade, Error, Percent};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use web_sys::wasm_bindgen::JsValue;

pub type Properties = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapEventName {
    #[serde(rename = "Swap Details Expanded")]
    SwapDetailsExpanded,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceElementName {
    #[serde(rename = "swap-details-dropdown")]
    SwapDetailsDropdown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserEvent {
    #[serde(rename = "onClick")]
    OnClick,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: SwapEventName,
    pub element: InterfaceElementName,
    pub browser_event: BrowserEvent,
    pub properties: Properties,
    pub should_log_impression: bool,
}

// Trace context

/// Where in the interface an event happened. Nested providers refine their parent's context.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl TraceContext {
    /// Fields set on `child` take precedence.
    pub fn merge(&self, child: &TraceContext) -> TraceContext {
        TraceContext {
            page: child.page.clone().or_else(|| self.page.clone()),
            section: child.section.clone().or_else(|| self.section.clone()),
            modal: child.modal.clone().or_else(|| self.modal.clone()),
            element: child.element.clone().or_else(|| self.element.clone()),
        }
    }

    pub fn to_properties(&self) -> Properties {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Properties::new(),
        }
    }
}

pub fn use_trace() -> TraceContext {
    use_context::<TraceContext>().unwrap_or_default()
}

// Property formatting

pub fn format_common_properties_for_trade(trade: &Trade, allowed_slippage: Percent) -> Properties {
    let input = &trade.input_amount;
    let output = &trade.output_amount;

    let mut properties = Properties::new();
    properties.insert("routing".into(), trade.quote_source.as_str().into());
    properties.insert("type".into(), trade.trade_type.as_str().into());
    properties.insert(
        "ura_quote_id".into(),
        trade.quote_id.clone().map_or(Value::Null, Value::from),
    );
    properties.insert(
        "token_in_address".into(),
        input.currency.address.clone().into(),
    );
    properties.insert(
        "token_out_address".into(),
        output.currency.address.clone().into(),
    );
    properties.insert("token_in_symbol".into(), input.currency.symbol.clone().into());
    properties.insert(
        "token_out_symbol".into(),
        output.currency.symbol.clone().into(),
    );
    properties.insert("token_in_amount".into(), input.to_exact().into());
    properties.insert("token_out_amount".into(), output.to_exact().into());
    properties.insert(
        "price_impact_basis_points".into(),
        trade.price_impact.bips().into(),
    );
    properties.insert(
        "allowed_slippage_basis_points".into(),
        allowed_slippage.bips().into(),
    );
    properties.insert(
        "is_auto_router_api".into(),
        matches!(trade.quote_source, crate::QuoteSource::RoutingApi).into(),
    );
    properties.insert("chain_id".into(), input.currency.chain_id.clone().into());
    properties.insert(
        "swap_quote_block_number".into(),
        trade.block_number.map_or(Value::Null, Value::from),
    );

    properties
}

/// Trade properties (if any) overlaid with the trace context. Trace keys win.
pub fn event_properties(
    trade: Option<&Trade>,
    allowed_slippage: Percent,
    trace: &TraceContext,
) -> Properties {
    let mut properties = trade
        .map(|trade| format_common_properties_for_trade(trade, allowed_slippage))
        .unwrap_or_default();

    properties.extend(trace.to_properties());
    properties
}

// Sinks

pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: &AnalyticsEvent);
}

/// Logs events through `tracing`. This is the default when no sink is provided.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn send(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(&event.properties) {
            Ok(properties) => info!(
                target: "analytics",
                name = ?event.name,
                element = ?event.element,
                impression = event.should_log_impression,
                %properties,
                "analytics event"
            ),
            Err(error) => warn!(target: "analytics", "unable to serialize properties: {error}"),
        }
    }
}

/// Writes events to the browser console as plain JS objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn to_js(event: &AnalyticsEvent) -> Result<JsValue, Error> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        Ok(event.serialize(&serializer)?)
    }
}

impl AnalyticsSink for ConsoleSink {
    fn send(&self, event: &AnalyticsEvent) {
        match Self::to_js(event) {
            Ok(value) => web_sys::console::log_2(&JsValue::from_str("[analytics]"), &value),
            Err(error) => warn!(target: "analytics", "{error}"),
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl AnalyticsSink for RecordingSink {
    fn send(&self, event: &AnalyticsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[derive(Clone)]
pub struct Analytics {
    sink: Arc<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn send(&self, event: &AnalyticsEvent) {
        debug!("sending analytics event {:?}", event.name);
        self.sink.send(event);
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics").finish_non_exhaustive()
    }
}

pub fn use_analytics() -> Analytics {
    use_context::<Analytics>().unwrap_or_default()
}

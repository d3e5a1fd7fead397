use ammber_components::LoadingRow;
use ammber_core::{
    constants::PRICE_IMPACT_WARNING_BIPS, use_theme, utils::format_usd, Percent, Trade,
    TradeType,
};
use leptos::prelude::*;
use tracing::{info, warn};

/// The strings shown in the details breakdown for one trade.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapDetailValues {
    pub network_cost: String,
    pub price_impact: String,
    pub price_impact_warning: bool,
    pub slippage_bound_label: &'static str,
    pub slippage_bound: String,
    pub expected_label: &'static str,
    pub expected: String,
    pub max_slippage: String,
    pub routing: String,
}

impl SwapDetailValues {
    pub fn new(trade: &Trade, allowed_slippage: Percent) -> Self {
        let (slippage_bound_label, slippage_bound, expected_label, expected) =
            match trade.trade_type {
                TradeType::ExactInput => (
                    "Minimum output",
                    trade.minimum_amount_out(allowed_slippage),
                    "Expected output",
                    trade.output_amount.to_string(),
                ),
                TradeType::ExactOutput => (
                    "Maximum input",
                    trade.maximum_amount_in(allowed_slippage),
                    "Expected input",
                    trade.input_amount.to_string(),
                ),
            };

        let slippage_bound = match slippage_bound {
            Ok(amount) => amount.to_string(),
            Err(error) => {
                warn!("{slippage_bound_label}: {error}");
                "-".to_string()
            }
        };

        let price_impact = match trade.price_impact.bips() {
            0 => trade.price_impact.to_string(),
            _ => format!("-{}", trade.price_impact),
        };

        Self {
            network_cost: trade
                .gas_use_estimate_usd
                .map(format_usd)
                .unwrap_or_else(|| "-".to_string()),
            price_impact,
            price_impact_warning: trade.price_impact.bips() > PRICE_IMPACT_WARNING_BIPS,
            slippage_bound_label,
            slippage_bound,
            expected_label,
            expected,
            max_slippage: allowed_slippage.to_string(),
            routing: format!(
                "{} · {}",
                trade.quote_source.label(),
                trade.route_symbols()
            ),
        }
    }
}

#[component]
pub fn AdvancedSwapDetails(
    #[prop(into)] trade: Signal<Option<Trade>>,
    #[prop(into)] allowed_slippage: Signal<Percent>,
    #[prop(into)] syncing: Signal<bool>,
) -> impl IntoView {
    info!("rendering <AdvancedSwapDetails/>");

    let theme = use_theme();

    let values = Memo::new(move |_| {
        trade.with(|trade| {
            trade
                .as_ref()
                .map(|trade| SwapDetailValues::new(trade, allowed_slippage.get()))
        })
    });

    let field = move |f: fn(&SwapDetailValues) -> String| {
        move || values.with(|values| values.as_ref().map(f).unwrap_or_default())
    };
    let label = move |f: fn(&SwapDetailValues) -> &'static str, default: &'static str| {
        Signal::derive(move || values.with(|values| values.as_ref().map_or(default, f)))
    };
    let price_impact_warning =
        move || values.with(|values| values.as_ref().is_some_and(|v| v.price_impact_warning));

    view! {
        <div class="w-full box-border flex flex-col gap-2">
            <DetailRow
                label="Network cost"
                tooltip="The fee paid to process your transaction."
                syncing
            >
                <p class="m-0 text-foreground">{field(|v| v.network_cost.clone())}</p>
            </DetailRow>
            <DetailRow
                label="Price impact"
                tooltip="The impact your trade has on the market price of this pool."
                syncing
            >
                <p
                    class="m-0 text-foreground"
                    style:color=move || {
                        if price_impact_warning() { theme.critical } else { "inherit" }
                    }
                >
                    {field(|v| v.price_impact.clone())}
                </p>
            </DetailRow>
            <DetailRow
                label=label(|v| v.slippage_bound_label, "Minimum output")
                tooltip="If the price moves so that you will receive less than this amount, your transaction will be reverted."
                syncing
            >
                <p class="m-0 text-foreground">{field(|v| v.slippage_bound.clone())}</p>
            </DetailRow>
            <DetailRow
                label=label(|v| v.expected_label, "Expected output")
                tooltip="The amount you expect to receive at the current market price."
                syncing
            >
                <p class="m-0 text-foreground">{field(|v| v.expected.clone())}</p>
            </DetailRow>
            <DetailRow label="Max slippage" syncing>
                <p class="m-0 text-foreground">{field(|v| v.max_slippage.clone())}</p>
            </DetailRow>
            <DetailRow
                label="Order routing"
                tooltip="The path your trade takes through liquidity pools."
                syncing
            >
                <p class="m-0 text-foreground">{field(|v| v.routing.clone())}</p>
            </DetailRow>
        </div>
    }
}

#[component]
fn DetailRow(
    #[prop(into)] label: Signal<&'static str>,
    #[prop(optional)] tooltip: Option<&'static str>,
    #[prop(into)] syncing: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="w-full flex flex-row items-center justify-between text-sm">
            <p class="m-0 text-muted-foreground" title=tooltip>
                {label}
            </p>
            <Show when=move || !syncing.get() fallback=|| view! { <LoadingRow /> }>
                {children()}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ammber_core::{Currency, CurrencyAmount, QuoteSource};

    fn trade(trade_type: TradeType) -> Trade {
        let sscrt = Currency::new("pulsar-3", "secret1sscrt", "sSCRT", 6);
        let susdc = Currency::new("pulsar-3", "secret1susdc", "sUSDC", 6);

        Trade {
            trade_type,
            input_amount: CurrencyAmount::new(sscrt.clone(), 1_000_000),
            output_amount: CurrencyAmount::new(susdc.clone(), 100_000_000),
            price_impact: Percent::from_bips(35),
            quote_source: QuoteSource::Client,
            route: vec![sscrt, susdc],
            gas_use_estimate_usd: Some(0.004),
            quote_id: None,
            block_number: None,
        }
    }

    #[test]
    fn exact_input_shows_minimum_output() {
        let values = SwapDetailValues::new(&trade(TradeType::ExactInput), Percent::from_bips(50));

        assert_eq!(values.slippage_bound_label, "Minimum output");
        assert_eq!(values.slippage_bound, "99.502487 sUSDC");
        assert_eq!(values.expected_label, "Expected output");
        assert_eq!(values.expected, "100 sUSDC");
        assert_eq!(values.max_slippage, "0.5%");
    }

    #[test]
    fn exact_output_shows_maximum_input() {
        let values = SwapDetailValues::new(&trade(TradeType::ExactOutput), Percent::from_bips(100));

        assert_eq!(values.slippage_bound_label, "Maximum input");
        assert_eq!(values.slippage_bound, "1.01 sSCRT");
        assert_eq!(values.expected_label, "Expected input");
        assert_eq!(values.expected, "1 sSCRT");
    }

    #[test]
    fn fees_impact_and_route() {
        let values = SwapDetailValues::new(&trade(TradeType::ExactInput), Percent::from_bips(50));

        assert_eq!(values.network_cost, "<$0.01");
        assert_eq!(values.price_impact, "-0.35%");
        assert!(!values.price_impact_warning);
        assert_eq!(values.routing, "Client router · sSCRT > sUSDC");
    }

    #[test]
    fn high_price_impact_is_flagged() {
        let trade = Trade {
            price_impact: Percent::from_bips(250),
            gas_use_estimate_usd: None,
            ..trade(TradeType::ExactInput)
        };
        let values = SwapDetailValues::new(&trade, Percent::from_bips(50));

        assert!(values.price_impact_warning);
        assert_eq!(values.price_impact, "-2.5%");
        assert_eq!(values.network_cost, "-");
    }

    #[test]
    fn unrepresentable_bound_falls_back_to_dash() {
        let mut trade = trade(TradeType::ExactOutput);
        trade.input_amount.raw = cosmwasm_std::Uint128::MAX;

        let values = SwapDetailValues::new(&trade, Percent::from_bips(100));
        assert_eq!(values.slippage_bound, "-");
    }
}

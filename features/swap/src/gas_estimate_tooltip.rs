use ammber_components::LoadingOpacityContainer;
use ammber_core::{utils::format_usd, Trade};
use leptos::prelude::*;
use lucide_leptos::Fuel;

#[component]
pub fn GasEstimateTooltip(
    #[prop(into)] trade: Signal<Option<Trade>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let gas_cost = move || trade.with(|trade| gas_cost_label(trade.as_ref()));

    move || {
        gas_cost().map(|cost| {
            view! {
                <LoadingOpacityContainer loading>
                    <div
                        class="flex items-center gap-1 text-sm text-muted-foreground"
                        title="The fee paid to process your transaction. This must be paid in the network's native token."
                    >
                        <Fuel size=16 />
                        <span>{cost}</span>
                    </div>
                </LoadingOpacityContainer>
            }
        })
    }
}

/// `None` means the tooltip renders nothing.
fn gas_cost_label(trade: Option<&Trade>) -> Option<String> {
    trade
        .and_then(|trade| trade.gas_use_estimate_usd)
        .map(format_usd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ammber_core::{Currency, CurrencyAmount, Percent, QuoteSource, TradeType};

    fn trade(gas_use_estimate_usd: Option<f64>) -> Trade {
        let sscrt = Currency::new("pulsar-3", "secret1sscrt", "sSCRT", 6);

        Trade {
            trade_type: TradeType::ExactInput,
            input_amount: CurrencyAmount::new(sscrt.clone(), 1_000_000),
            output_amount: CurrencyAmount::new(sscrt.clone(), 1_000_000),
            price_impact: Percent::from_bips(0),
            quote_source: QuoteSource::Client,
            route: vec![sscrt],
            gas_use_estimate_usd,
            quote_id: None,
            block_number: None,
        }
    }

    #[test]
    fn hidden_without_trade() {
        assert_eq!(gas_cost_label(None), None);
    }

    #[test]
    fn hidden_without_estimate() {
        assert_eq!(gas_cost_label(Some(&trade(None))), None);
    }

    #[test]
    fn shows_usd_cost() {
        assert_eq!(gas_cost_label(Some(&trade(Some(1.234)))).as_deref(), Some("$1.23"));
        assert_eq!(gas_cost_label(Some(&trade(Some(0.001)))).as_deref(), Some("<$0.01"));
    }
}

use ammber_components::Trace;
use ammber_core::{
    constants::{DEFAULT_SLIPPAGE_BIPS, SLIPPAGE_STORAGE_KEY},
    Currency, CurrencyAmount, Percent, QuoteSource, Trade, TradeType, CHAIN_ID,
};
use ammber_swap::SwapDetailsDropdown;
use codee::string::FromToStringCodec;
use leptos::{ev, prelude::*};
use leptos_use::storage::use_local_storage;
use lucide_leptos::{RefreshCw, X};
use std::time::Duration;
use tracing::{debug, info, warn};

const QUOTE_DELAY: Duration = Duration::from_millis(800);

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    // slippage is in basis points. smallest supported slippage = 0.01%
    let (slippage, set_slippage, _) =
        use_local_storage::<u16, FromToStringCodec>(SLIPPAGE_STORAGE_KEY);

    if slippage.get_untracked() == 0 {
        set_slippage.set(DEFAULT_SLIPPAGE_BIPS);
    }

    let allowed_slippage = Signal::derive(move || Percent::from_bips(slippage.get() as u32));

    // The quote itself comes from elsewhere; this page only simulates its lifecycle.
    let (trade, set_trade) = signal(None::<Trade>);
    let (loading, set_loading) = signal(false);
    let (syncing, set_syncing) = signal(false);

    let request_quote = move |_| {
        let refreshing = trade.with_untracked(Option::is_some);
        debug!("requesting quote (refresh: {refreshing})");

        if refreshing {
            set_syncing.set(true);
        } else {
            set_loading.set(true);
        }

        set_timeout(
            move || {
                let block_number = trade
                    .with_untracked(|trade| trade.as_ref().and_then(|trade| trade.block_number))
                    .map_or(1, |block| block + 1);
                set_trade.set(Some(sample_quote(block_number)));
                set_loading.set(false);
                set_syncing.set(false);
            },
            QUOTE_DELAY,
        );
    };

    let clear_quote = move |_| set_trade.set(None);

    let on_slippage_change = move |ev: ev::Event| match event_target_value(&ev).parse::<Percent>() {
        Ok(percent) => set_slippage.set(u16::try_from(percent.bips()).unwrap_or(u16::MAX)),
        Err(error) => warn!("{error}"),
    };

    view! {
        <Trace page="swap-page">
            <div class="flex flex-col gap-4 w-full max-w-[480px]">
                <div class="flex flex-row items-center justify-between gap-2">
                    <button
                        on:click=request_quote
                        class="flex items-center gap-2 h-8 px-3 text-sm font-semibold bg-secondary text-secondary-foreground rounded-md"
                    >
                        <RefreshCw size=16 />
                        "Get quote"
                    </button>
                    <button
                        on:click=clear_quote
                        class="flex items-center gap-2 h-8 px-3 text-sm font-semibold bg-secondary text-secondary-foreground rounded-md"
                    >
                        <X size=16 />
                        "Clear"
                    </button>
                    <div class="relative flex items-center isolate box-border w-24">
                        <input
                            class="w-full box-border px-3 h-8 text-sm font-semibold bg-transparent text-foreground rounded-md"
                            inputmode="decimal"
                            type="text"
                            pattern="^[0-9]*[.,]?[0-9]*$"
                            prop:value=move || {
                                allowed_slippage.get().to_string().trim_end_matches('%').to_string()
                            }
                            on:change=on_slippage_change
                        />
                        <div class="absolute right-0 top-0 w-8 h-8 z-[2] flex items-center justify-center text-foreground">
                            "%"
                        </div>
                    </div>
                </div>
                <Trace section="swap-widget">
                    <SwapDetailsDropdown
                        trade
                        syncing
                        loading
                        allowed_slippage
                    />
                </Trace>
            </div>
        </Trace>
    }
}

fn sample_quote(block_number: u64) -> Trade {
    let sscrt = Currency::new(
        CHAIN_ID,
        "secret1k0jntykt7e4g3y88ltc60czgjuqdy4c9e8fzek",
        "sSCRT",
        6,
    );
    let susdc = Currency::new(
        CHAIN_ID,
        "secret1vkq022x4q8t8kx9de3r84u669l65xnwf2lg3e6",
        "sUSDC",
        6,
    );

    Trade {
        trade_type: TradeType::ExactInput,
        input_amount: CurrencyAmount::new(sscrt.clone(), 10_000_000),
        output_amount: CurrencyAmount::new(susdc.clone(), 1_000_000_000),
        price_impact: Percent::from_bips(35),
        quote_source: QuoteSource::Client,
        route: vec![sscrt, susdc],
        gas_use_estimate_usd: Some(0.0125),
        quote_id: Some(format!("quote-{block_number}")),
        block_number: Some(block_number),
    }
}

use crate::{
    dropdown_state::{header_click_event, DetailsState, DropdownView, HeaderContent},
    AdvancedSwapDetails, GasEstimateTooltip, TradePrice,
};
use ammber_components::{AnimatedDropdown, LoadingOpacityContainer, PollingSpinner};
use ammber_core::{
    use_analytics, use_theme, use_trace, Analytics, Percent, TraceContext, Trade,
};
use leptos::{ev, prelude::*};
use lucide_leptos::ChevronDown;
use tracing::{debug, info};

#[component]
pub fn SwapDetailsDropdown(
    #[prop(into)] trade: Signal<Option<Trade>>,
    #[prop(into)] syncing: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] allowed_slippage: Signal<Percent>,
) -> impl IntoView {
    info!("rendering <SwapDetailsDropdown/>");

    on_cleanup(move || {
        info!("cleaning up <SwapDetailsDropdown/>");
    });

    let theme = use_theme();
    let analytics = use_analytics();
    let trace = use_trace();

    let details = RwSignal::new(DetailsState::default());

    let view_state = Memo::new(move |_| {
        DropdownView::describe(
            trade.with(Option::is_some),
            loading.get(),
            syncing.get(),
            details.get(),
        )
    });

    let execution_price =
        Signal::derive(move || trade.with(|trade| trade.as_ref().map(Trade::execution_price)));
    let price_dimmed = Signal::derive(move || {
        matches!(
            view_state.get().header,
            HeaderContent::Price { dimmed: true }
        )
    });
    let fetching = Signal::derive(move || loading.get() || syncing.get());
    let body_open = Signal::derive(move || view_state.get().body_open);

    let on_header_click = move |_: ev::MouseEvent| {
        toggle_details(details, trade, allowed_slippage, &trace, &analytics)
    };

    view! {
        <div
            class="flex flex-col w-full box-border rounded-2xl border border-solid px-4 py-3"
            style:border-color=theme.surface3
        >
            // Header (Click to Toggle)
            <div
                data-testid="swap-details-header-row"
                class="flex items-center justify-between p-0 min-h-[24px]"
                class=("cursor-pointer", move || !view_state.get().arrow_disabled)
                on:click=on_header_click
            >
                <div class="flex items-center">
                    <Show when=move || view_state.get().show_spinner>
                        <PollingSpinner />
                    </Show>
                    <Show
                        when=move || {
                            matches!(view_state.get().header, HeaderContent::Price { .. })
                        }
                        fallback=move || {
                            view! {
                                <Show when=move || {
                                    view_state.get().header == HeaderContent::Fetching
                                }>
                                    <p class="m-0 text-sm text-muted-foreground">
                                        "Fetching best price..."
                                    </p>
                                </Show>
                            }
                        }
                    >
                        <LoadingOpacityContainer loading=price_dimmed>
                            <TradePrice price=execution_price />
                        </LoadingOpacityContainer>
                    </Show>
                </div>
                <div class="flex items-center gap-1">
                    <Show when=move || view_state.get().show_gas_estimate>
                        <GasEstimateTooltip trade loading=fetching />
                    </Show>
                    <div
                        class="flex items-center justify-center transition-transform duration-100 ease-linear"
                        class=("rotate-180", move || view_state.get().arrow_open)
                        style:color=move || {
                            if view_state.get().arrow_disabled {
                                theme.surface2
                            } else {
                                theme.neutral3
                            }
                        }
                    >
                        <ChevronDown size=20 />
                    </div>
                </div>
            </div>

            // Expandable Content
            <Show when=move || view_state.get().body_mounted>
                <AnimatedDropdown open=body_open>
                    <div data-testid="advanced-swap-details" class="pt-3">
                        <AdvancedSwapDetails trade allowed_slippage syncing />
                    </div>
                </AnimatedDropdown>
            </Show>
        </div>
    }
}

/// Reports the click with the pre-click state, then flips it.
fn toggle_details(
    details: RwSignal<DetailsState>,
    trade: Signal<Option<Trade>>,
    allowed_slippage: Signal<Percent>,
    trace: &TraceContext,
    analytics: &Analytics,
) {
    let state = details.get_untracked();
    let event = trade.with_untracked(|trade| {
        header_click_event(
            trade.as_ref(),
            allowed_slippage.get_untracked(),
            trace,
            state,
        )
    });
    analytics.send(&event);

    let next = state.toggle();
    debug!("swap details {next:?}");
    details.set(next);
}

use ammber_core::Price;
use leptos::{ev, prelude::*};

/// `1 BASE = x QUOTE`. Clicking flips the quote direction.
#[component]
pub fn TradePrice(#[prop(into)] price: Signal<Option<Price>>) -> impl IntoView {
    let show_inverted = RwSignal::new(false);

    let label = move || {
        price.with(|price| {
            price
                .as_ref()
                .map(|price| price_label(price, show_inverted.get()))
        })
    };

    let on_click = move |ev: ev::MouseEvent| {
        // keep the click from reaching the dropdown header
        ev.stop_propagation();
        flip(show_inverted);
    };

    view! {
        <button
            data-testid="trade-price"
            class="appearance-none border-0 bg-transparent p-0 m-0 text-left text-sm text-foreground font-semibold cursor-pointer"
            title="Flip price direction"
            on:click=on_click
        >
            {label}
        </button>
    }
}

fn price_label(price: &Price, inverted: bool) -> String {
    if inverted {
        price.invert().to_string()
    } else {
        price.to_string()
    }
}

fn flip(show_inverted: RwSignal<bool>) {
    show_inverted.update(|inverted| *inverted = !*inverted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ammber_core::Currency;

    fn price() -> Price {
        Price::new(
            Currency::new("pulsar-3", "secret1sscrt", "sSCRT", 6),
            Currency::new("pulsar-3", "secret1susdc", "sUSDC", 6),
            4.0,
        )
    }

    #[test]
    fn label_follows_direction() {
        assert_eq!(price_label(&price(), false), "1 sSCRT = 4 sUSDC");
        assert_eq!(price_label(&price(), true), "1 sUSDC = 0.25 sSCRT");
    }

    #[test]
    fn inverting_twice_restores_the_label() {
        let inverted = price().invert();
        assert_eq!(price_label(&inverted, true), price_label(&price(), false));
    }

    #[test]
    fn clicks_alternate_direction() {
        let owner = Owner::new();
        owner.with(|| {
            let show_inverted = RwSignal::new(false);

            flip(show_inverted);
            assert!(show_inverted.get_untracked());
            assert_eq!(
                price_label(&price(), show_inverted.get_untracked()),
                "1 sUSDC = 0.25 sSCRT"
            );

            flip(show_inverted);
            assert!(!show_inverted.get_untracked());
        });
    }
}

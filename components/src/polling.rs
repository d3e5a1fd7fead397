use ammber_core::use_theme;
use leptos::prelude::*;

/// Small spinner shown next to a value that is being refreshed. Hidden on narrow screens.
#[component]
pub fn PollingSpinner() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div
            class="hidden md:flex items-center justify-center h-4 w-4 mx-0.5 transition-colors duration-250"
            style:color=theme.neutral1
        >
            <div
                class="relative h-2 w-2 min-h-2 min-w-2 rounded-full"
                style:background-color=theme.surface3
            >
                <div
                    class="absolute -left-[3px] -top-[3px] h-3.5 w-3.5 box-border rounded-full animate-spin
                    border border-solid border-transparent border-l-2"
                    style:border-left-color=theme.neutral1
                ></div>
            </div>
        </div>
    }
}

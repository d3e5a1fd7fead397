use leptos::prelude::*;

/// Dims its children while a new value is on the way.
#[component]
pub fn LoadingOpacityContainer(#[prop(into)] loading: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div
            class="transition-opacity duration-200 ease-standard"
            class=(["opacity-50", "pointer-events-none"], move || loading.get())
        >
            {children()}
        </div>
    }
}

/// A pulsing placeholder the size of a line of text.
#[component]
pub fn LoadingRow(
    /// Tailwind width class
    #[prop(default = "w-16")]
    width: &'static str,
) -> impl IntoView {
    view! { <div class=format!("h-4 {width} rounded-md bg-muted animate-pulse")></div> }
}

use ammber_core::{
    analytics::{ConsoleSink, TracingSink},
    Analytics, Theme, BASE_URL,
};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use tracing::info;

mod routes;

use routes::swap::Swap;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(Theme::default());
    // Debug builds print events as objects in the browser console; release builds go through
    // the log subscriber only.
    provide_context(if cfg!(debug_assertions) {
        Analytics::new(ConsoleSink)
    } else {
        Analytics::new(TracingSink)
    });

    view! {
        <Title text="Ammber | Trade" />
        <Router base=BASE_URL>
            <main class="min-h-screen flex justify-center box-border px-4 py-8 bg-background text-foreground">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Swap />
                    <Route path=path!("/trade") view=Swap />
                </Routes>
            </main>
        </Router>
    }
}

use ammber_core::{use_trace, TraceContext};
use leptos::prelude::*;

/// Refines the analytics trace context for everything rendered inside it.
#[component]
pub fn Trace(
    #[prop(optional, into)] page: Option<String>,
    #[prop(optional, into)] section: Option<String>,
    #[prop(optional, into)] modal: Option<String>,
    #[prop(optional, into)] element: Option<String>,
    children: Children,
) -> impl IntoView {
    let parent = use_trace();
    let trace = parent.merge(&TraceContext {
        page,
        section,
        modal,
        element,
    });

    provide_context(trace);

    children()
}

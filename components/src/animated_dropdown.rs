use leptos::{html, prelude::*};
use tracing::debug;

/// Animates the height of its children between `0` and their natural height.
///
/// The children stay mounted while closed, so their own state survives a collapse.
#[component]
pub fn AnimatedDropdown(
    /// Whether the content is visible.
    #[prop(into)]
    open: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();

    Effect::new(move |previous: Option<bool>| {
        let is_open = open.get();

        let Some(content) = content_ref.get() else {
            return is_open;
        };
        let full_height = content.scroll_height();

        match (previous, is_open) {
            // first run: jump straight to the resting height
            (None, true) => {
                content.style(("height", "auto"));
            }
            (None, false) => {
                content.style(("height", "0px"));
            }
            (Some(was_open), true) if !was_open => {
                debug!("expanding dropdown to {full_height}px");
                content.style(("height", "0px"));
                request_animation_frame(move || {
                    content.style(("height", format!("{}px", full_height)));
                });
            }
            (Some(was_open), false) if was_open => {
                debug!("collapsing dropdown from {full_height}px");
                // Ensure the content has an explicit height before collapsing
                content.style(("height", format!("{}px", full_height)));
                request_animation_frame(move || {
                    content.style(("height", "0px"));
                });
            }
            _ => (),
        }

        is_open
    });

    view! {
        <div
            node_ref=content_ref
            class="w-full box-border overflow-hidden transition-all duration-300 ease-standard"
            class=(["opacity-0", "invisible"], move || !open.get())
            class=(["opacity-100", "visible"], move || open.get())
            // Reset height to `auto` after the transition ends to allow dynamic resizing
            on:transitionend=move |ev| {
                if !is_own_event(&ev.target(), &ev.current_target()) {
                    return;
                }
                if open.get_untracked() {
                    if let Some(content) = content_ref.get_untracked() {
                        content.style(("height", "auto"));
                    }
                }
            }
        >
            {children()}
        </div>
    }
}

/// Transitions inside the children bubble up too; only the container's own count.
fn is_own_event<T: PartialEq>(target: &Option<T>, current_target: &Option<T>) -> bool {
    target.is_some() && target == current_target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_transitions_bubbling_from_children() {
        assert!(is_own_event(&Some("container"), &Some("container")));
        assert!(!is_own_event(&Some("row"), &Some("container")));
        assert!(!is_own_event::<&str>(&None, &None));
    }
}

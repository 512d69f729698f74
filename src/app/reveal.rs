use leptos::html;
use leptos::prelude::*;
use leptos_use::use_intersection_observer;

/// Class carried by revealable elements until they first scroll into view.
const PENDING: &str = "reveal-pending";

/// Flips to `true` the first time `target` intersects the viewport and
/// stays there. Nothing is observed during server rendering.
pub fn use_seen_once(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (seen, set_seen) = signal(false);
    let _ = use_intersection_observer(target, move |entries, _| {
        if !seen.get_untracked() && entries.iter().any(|e| e.is_intersecting()) {
            set_seen.set(true);
        }
    });
    seen
}

/// Wraps `children` in a div that plays `animation` once, the first time it
/// becomes visible.
#[component]
pub fn Reveal(
    animation: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: usize,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let seen = use_seen_once(target);

    view! {
        <div
            node_ref=target
            class=move || reveal_class(&class, animation, seen.get())
            style=format!("animation-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

fn reveal_class(base: &str, animation: &str, seen: bool) -> String {
    let state = if seen { animation } else { PENDING };
    if base.is_empty() {
        state.to_string()
    } else {
        format!("{base} {state}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_seen() {
        assert_eq!(reveal_class("p-6", "animate-fade-up", false), "p-6 reveal-pending");
        assert_eq!(reveal_class("", "animate-fade-up", false), "reveal-pending");
    }

    #[test]
    fn test_animation_added_once_seen() {
        let class = reveal_class("p-6", "animate-fade-up", true);
        assert_eq!(class, "p-6 animate-fade-up");
        assert!(!class.contains(PENDING));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_render_does_not_start_animation() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <Reveal animation="animate-slide-left" class="p-6">
                    "below the fold"
                </Reveal>
            }
            .to_html();
            assert!(html.contains("p-6 reveal-pending"));
            assert!(!html.contains("animate-slide-left"));
            assert!(html.contains("below the fold"));
        });
    }
}

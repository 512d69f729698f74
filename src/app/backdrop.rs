use leptos::prelude::*;

use crate::pointer::PointerPosition;

/// Decorative layers behind the page: a glow that follows the pointer and a
/// faint grid. Neither takes pointer events.
#[component]
pub fn Backdrop(pointer: ReadSignal<PointerPosition>) -> impl IntoView {
    view! {
        <div
            aria-hidden="true"
            class="fixed inset-0 opacity-20 pointer-events-none z-0"
            style:background=move || pointer.get().gradient()
        ></div>
        <div
            aria-hidden="true"
            class="fixed top-0 left-0 w-full h-full bg-grid-pattern opacity-10 pointer-events-none z-0"
        ></div>
    }
}

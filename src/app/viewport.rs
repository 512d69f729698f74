use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::observers::{PointerHandler, ScrollHandler, Subscription, Viewport};
use crate::pointer::PointerPosition;
use crate::sections::{Geometry, SectionId};

/// The real browser window. Listeners are no-ops during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> Option<f64> {
        window().scroll_y().ok()
    }

    fn section_geometry(&self, section: SectionId) -> Option<Geometry> {
        let el = document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Geometry::new(
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }

    fn on_scroll(&self, mut handler: ScrollHandler) -> Subscription {
        let stop = use_event_listener(use_window(), ev::scroll, move |_| handler());
        Subscription::new(stop)
    }

    fn on_pointer_move(&self, mut handler: PointerHandler) -> Subscription {
        let stop = use_event_listener(use_window(), ev::mousemove, move |ev| {
            handler(PointerPosition::new(ev.client_x(), ev.client_y()));
        });
        Subscription::new(stop)
    }
}

//! Event subscriptions that feed the page's two pieces of view state.
//!
//! The page owns an active [`SectionId`] and a [`PointerPosition`]. Both
//! are written only from the handlers registered here, and every
//! registration hands back a [`Subscription`] that detaches the handler
//! when cancelled or dropped.

use crate::pointer::PointerPosition;
use crate::sections::{resolve_active, Geometry, SectionId};

pub type ScrollHandler = Box<dyn FnMut() + Send + 'static>;
pub type PointerHandler = Box<dyn FnMut(PointerPosition) + Send + 'static>;

/// Handle to a registered listener.
///
/// The release closure runs exactly once: on [`Subscription::cancel`], or
/// on drop if it was never cancelled. Dropping covers early returns and
/// unwinding, so a mounted handler can't outlive its owner.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync + 'static>>,
}

impl Subscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// What the observers need from the host window.
pub trait Viewport {
    /// Current vertical scroll offset, `None` if it can't be read.
    fn scroll_y(&self) -> Option<f64>;

    /// Live geometry of a section, `None` if it isn't in the document.
    fn section_geometry(&self, section: SectionId) -> Option<Geometry>;

    fn on_scroll(&self, handler: ScrollHandler) -> Subscription;

    fn on_pointer_move(&self, handler: PointerHandler) -> Subscription;
}

/// Republishes every pointer-move position through `set_pointer`.
pub fn track_pointer<V, P>(viewport: &V, set_pointer: P) -> Subscription
where
    V: Viewport,
    P: Fn(PointerPosition) + Send + 'static,
{
    viewport.on_pointer_move(Box::new(move |pos| set_pointer(pos)))
}

/// Re-resolves the active section on every scroll event.
///
/// Geometry is read fresh each time. `set_section` is only called when
/// some section matched, so an unmatched offset keeps the previous value.
pub fn track_active_section<V, S>(viewport: V, set_section: S) -> Subscription
where
    V: Viewport + Clone + Send + 'static,
    S: Fn(SectionId) + Send + 'static,
{
    let source = viewport.clone();
    viewport.on_scroll(Box::new(move || {
        let Some(scroll_y) = source.scroll_y() else {
            return;
        };
        if let Some(section) = resolve_active(scroll_y, |s| source.section_geometry(s)) {
            set_section(section);
        }
    }))
}

/// Both page observers, acquired together and released together.
#[derive(Debug)]
pub struct Observers {
    subscriptions: Vec<Subscription>,
}

impl Observers {
    pub fn mount<V, S, P>(viewport: V, set_section: S, set_pointer: P) -> Self
    where
        V: Viewport + Clone + Send + 'static,
        S: Fn(SectionId) + Send + 'static,
        P: Fn(PointerPosition) + Send + 'static,
    {
        let pointer = track_pointer(&viewport, set_pointer);
        let scroll = track_active_section(viewport, set_section);
        Self {
            subscriptions: vec![scroll, pointer],
        }
    }

    pub fn unmount(self) {
        for subscription in self.subscriptions {
            subscription.cancel();
        }
    }
}

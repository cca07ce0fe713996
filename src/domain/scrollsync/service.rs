use std::sync::Arc;

use super::model::{
    IntersectionEvent, ScrollBehavior, ScrollCommand, SectionBounds, ViewportBand,
};
use crate::domain::session::SessionService;

/// Keeps the sidebar's selected category in sync with scroll position.
///
/// The machine is fed synthetic intersection events instead of DOM
/// observer callbacks, so it runs headless. Among simultaneously
/// intersecting sections the last event wins, matching the observer
/// callback it replaces.
pub struct ScrollSync {
    session: Arc<SessionService>,
    band: ViewportBand,
}

impl ScrollSync {
    pub fn new(session: Arc<SessionService>) -> Self {
        Self {
            session,
            band: ViewportBand::default(),
        }
    }

    pub fn with_band(session: Arc<SessionService>, band: ViewportBand) -> Self {
        Self { session, band }
    }

    pub fn band(&self) -> ViewportBand {
        self.band
    }

    /// Currently active category, if any.
    pub fn active(&self) -> Option<i64> {
        self.session.selected_category()
    }

    /// Translate section geometry into intersection events against the
    /// band. Order follows the input order.
    pub fn events_for(
        &self,
        sections: &[(i64, SectionBounds)],
        viewport_height: f64,
    ) -> Vec<IntersectionEvent> {
        sections
            .iter()
            .map(|&(category_id, bounds)| IntersectionEvent {
                category_id,
                is_intersecting: self.band.intersects(bounds, viewport_height),
            })
            .collect()
    }

    /// Process a batch of observer events. Each intersecting event
    /// transitions the active category; non-intersecting events are
    /// ignored. Returns the active category after the batch.
    pub fn observe(&self, events: &[IntersectionEvent]) -> Option<i64> {
        let mut activated = None;
        for event in events {
            if event.is_intersecting {
                activated = Some(event.category_id);
            }
        }
        if let Some(category_id) = activated {
            self.session.set_selected_category(Some(category_id));
        }
        self.session.selected_category()
    }

    /// Sidebar selection: persist the choice and ask the rendering
    /// layer to smooth-scroll the section's top to the viewport top.
    pub fn select(&self, category_id: i64) -> ScrollCommand {
        self.session.set_selected_category(Some(category_id));
        ScrollCommand {
            category_id,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

use std::sync::Arc;

use pretty_assertions::assert_eq;

use ainav_core::domain::scrollsync::{ScrollBehavior, ScrollSync, SectionBounds};
use ainav_core::domain::session::SessionService;
use ainav_core::infrastructure::store::MemoryStore;

fn sync() -> ScrollSync {
    ScrollSync::new(Arc::new(SessionService::new(Arc::new(MemoryStore::new()))))
}

/// Simulates a scroll through three stacked sections by sliding their
/// bounds upward and feeding the synthetic events back into the machine.
#[test]
fn it_should_track_the_section_scrolled_into_the_band() {
    let sync = sync();
    let viewport = 1000.0;
    let heights = [800.0, 600.0, 900.0];

    let sections_at = |scroll: f64| {
        let mut top = -scroll;
        let mut out = Vec::new();
        for (idx, height) in heights.iter().enumerate() {
            out.push((
                idx as i64 + 1,
                SectionBounds {
                    top,
                    bottom: top + height,
                },
            ));
            top += height;
        }
        out
    };

    // At the top of the page only the first section sits in the band.
    let events = sync.events_for(&sections_at(0.0), viewport);
    assert_eq!(sync.observe(&events), Some(1));

    // Mid-scroll both 2 and 3 overlap the band; the last intersecting
    // event wins, exactly like the DOM observer callback.
    let events = sync.events_for(&sections_at(900.0), viewport);
    assert_eq!(sync.observe(&events), Some(3));

    // Deep scroll: only the last section remains.
    let events = sync.events_for(&sections_at(1600.0), viewport);
    assert_eq!(sync.observe(&events), Some(3));
}

#[test]
fn it_should_settle_on_the_selected_category_after_the_scroll() {
    let sync = sync();
    let viewport = 1000.0;

    let command = sync.select(2);
    assert_eq!(command.behavior, ScrollBehavior::Smooth);

    // The rendering layer scrolls section 2's top to the viewport top;
    // the observer then fires for the section sitting in the band.
    let settled = [(2, SectionBounds { top: 0.0, bottom: 600.0 })];
    let events = sync.events_for(&settled, viewport);
    assert_eq!(sync.observe(&events), Some(2));
    assert_eq!(sync.active(), Some(2));
}

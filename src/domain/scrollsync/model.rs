/// The viewport band inside which a category section counts as active:
/// the region from `top_offset_px` below the viewport top down to
/// `1 - bottom_fraction` of the viewport height. With the defaults a
/// section is active once its top passes 50px below the viewport top
/// and while its content still occupies the upper ~70% of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    pub top_offset_px: f64,
    pub bottom_fraction: f64,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_offset_px: 50.0,
            bottom_fraction: 0.30,
        }
    }
}

impl ViewportBand {
    /// Whether a section overlaps the band at all (zero threshold).
    pub fn intersects(&self, section: SectionBounds, viewport_height: f64) -> bool {
        let band_top = self.top_offset_px;
        let band_bottom = viewport_height * (1.0 - self.bottom_fraction);
        section.bottom > band_top && section.top < band_bottom
    }
}

/// Vertical extent of a category section, in viewport coordinates
/// (0 = viewport top, positive downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// One observer callback entry for a category section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub category_id: i64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Instruction for the rendering layer: bring the section's top to the
/// viewport top. The resulting scroll re-enters the observer loop and
/// settles the active category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub category_id: i64,
    pub behavior: ScrollBehavior,
}

//! Scroll-spy resolution: maps the window scroll offset to the section that
//! should be highlighted in the navbar.
//!
//! DESIGN
//! ======
//! Resolution is a pure scan over sections in visual (top-to-bottom) order.
//! The page owns the scroll subscription and layout measurement; this module
//! only answers "which section is active for this offset".

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// Navbar height plus margin, added to the scroll offset before comparison.
pub const NAV_OFFSET_PX: f64 = 110.0;

/// A named page region and its rendered top offset in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section<Id> {
    pub id: Id,
    pub top: f64,
}

impl<Id> Section<Id> {
    pub fn new(id: Id, top: f64) -> Self {
        Self { id, top }
    }
}

/// Resolve the active section for `scroll_y`.
///
/// Returns the last section whose top is at or above `scroll_y + offset`,
/// or the first section when none qualifies. Sections with equal tops
/// resolve to the later one. Returns `None` only for an empty slice.
pub fn resolve_active_section<Id: Copy>(scroll_y: f64, sections: &[Section<Id>], offset: f64) -> Option<Id> {
    let threshold = scroll_y + offset;
    sections
        .iter()
        .take_while(|section| section.top <= threshold)
        .last()
        .or_else(|| sections.first())
        .map(|section| section.id)
}

/// Measure section tops in order, stopping at the first section that has no
/// rendered element.
pub fn measure_sections<Id: Copy>(
    ids: impl IntoIterator<Item = Id>,
    mut top_of: impl FnMut(Id) -> Option<f64>,
) -> Vec<Section<Id>> {
    ids.into_iter()
        .map_while(|id| top_of(id).map(|top| Section::new(id, top)))
        .collect()
}

/// Validate a fresh measurement and resolve the active section against it.
///
/// # Errors
///
/// Returns [`LayoutError`] when the measured sections do not form a valid
/// layout, e.g. while the page is mid-reflow.
pub fn resolve_measured<Id: Copy>(scroll_y: f64, sections: Vec<Section<Id>>, offset: f64) -> Result<Id, LayoutError> {
    SectionLayout::new(sections).map(|layout| layout.resolve(scroll_y, offset))
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("section layout is empty")]
    Empty,
    #[error("section {index} has a non-finite top offset")]
    NonFinite { index: usize },
    #[error("section {index} starts above the section before it")]
    OutOfOrder { index: usize },
}

/// A validated section list: non-empty, finite, non-decreasing tops.
///
/// Resolution against a `SectionLayout` is total and monotonic in the
/// scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLayout<Id> {
    sections: Vec<Section<Id>>,
}

impl<Id: Copy> SectionLayout<Id> {
    /// Validate `sections` into a layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the list is empty, a top offset is NaN or
    /// infinite, or a section starts above its predecessor.
    pub fn new(sections: Vec<Section<Id>>) -> Result<Self, LayoutError> {
        if sections.is_empty() {
            return Err(LayoutError::Empty);
        }
        let mut prev = f64::NEG_INFINITY;
        for (index, section) in sections.iter().enumerate() {
            if !section.top.is_finite() {
                return Err(LayoutError::NonFinite { index });
            }
            if section.top < prev {
                return Err(LayoutError::OutOfOrder { index });
            }
            prev = section.top;
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section<Id>] {
        &self.sections
    }

    /// Active section for `scroll_y` with the given navbar `offset`.
    pub fn resolve(&self, scroll_y: f64, offset: f64) -> Id {
        // Non-empty by construction.
        resolve_active_section(scroll_y, &self.sections, offset).unwrap_or(self.sections[0].id)
    }

    /// Position of the active section in the layout.
    pub fn resolve_index(&self, scroll_y: f64, offset: f64) -> usize {
        let threshold = scroll_y + offset;
        self.sections
            .iter()
            .take_while(|section| section.top <= threshold)
            .count()
            .saturating_sub(1)
    }
}

//! Active-section highlighting.

use crate::page::PageState;
use std::collections::HashMap;

/// Visibility thresholds the observer reports at.
pub const DEFAULT_THRESHOLDS: [f64; 3] = [0.2, 0.4, 0.6];

/// One intersection observation for a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

impl SectionEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, ratio: f64, intersecting: bool) -> Self {
        Self {
            id: id.into(),
            ratio,
            intersecting,
        }
    }
}

/// The intersecting entry with the highest ratio. Equal ratios keep the
/// earliest entry in batch order.
#[must_use]
pub fn pick_visible(entries: &[SectionEntry]) -> Option<&SectionEntry> {
    entries
        .iter()
        .filter(|entry| entry.intersecting)
        .fold(None, |best: Option<&SectionEntry>, entry| match best {
            Some(current) if entry.ratio <= current.ratio => Some(current),
            _ => Some(entry),
        })
}

/// Lookup from `#section-id` hrefs to navigation link positions.
#[derive(Debug, Clone, Default)]
pub struct LinkIndex {
    by_hash: HashMap<String, usize>,
}

impl LinkIndex {
    /// Build from link hrefs in document order. A later link with the same
    /// href replaces an earlier one.
    pub fn from_hrefs<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let by_hash = hrefs
            .into_iter()
            .enumerate()
            .map(|(idx, href)| (href.as_ref().to_string(), idx))
            .collect();
        Self { by_hash }
    }

    #[must_use]
    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.by_hash.get(&format!("#{section_id}")).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}

pub trait LinkView {
    /// Remove the current-page marker from every navigation link.
    fn clear_current(&mut self);
    fn mark_current(&mut self, link: usize);
}

#[derive(Debug, Clone, Default)]
pub struct SectionHighlighter {
    index: LinkIndex,
}

impl SectionHighlighter {
    #[must_use]
    pub const fn new(index: LinkIndex) -> Self {
        Self { index }
    }

    /// Apply one observation batch. Returns the link marked current, if any.
    ///
    /// A batch with no intersecting section leaves the previous highlight in
    /// place. A winning section without a link clears every marker.
    pub fn observe(
        &self,
        state: &mut PageState,
        view: &mut impl LinkView,
        entries: &[SectionEntry],
    ) -> Option<usize> {
        let visible = pick_visible(entries)?;

        view.clear_current();
        state.active_section = Some(visible.id.clone());
        let link = self.index.link_for(&visible.id);
        if let Some(link) = link {
            view.mark_current(link);
        }
        log::debug!("highlight: section={} link={link:?}", visible.id);
        link
    }
}

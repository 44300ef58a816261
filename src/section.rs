//! Active-section tracking for the home view.
//!
//! The tracker decides which in-page section the nav highlights. It listens
//! to two inputs: fragment changes (`#about`) and viewport intersection
//! batches for the registered sections. Whichever arrives last wins; the two
//! sources are not prioritised against each other.
//!
//! Registration is scoped: [`ActiveSectionTracker::mount`] returns a
//! [`MountedTracker`] that owns the host registrations and releases them in
//! `Drop`, so every exit path (early return, unwinding) tears down the
//! fragment listener and the observer.

use crate::types::SectionId;

/// Vertical band of the viewport that counts as "being read".
///
/// Expressed as insets from the top and bottom edge, in percent of the
/// viewport height. The default band starts 20% below the top and ends 60%
/// above the bottom, so a section activates before it reaches the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedBand {
    pub top_inset_pct: f64,
    pub bottom_inset_pct: f64,
}

impl Default for ObservedBand {
    fn default() -> Self {
        Self {
            top_inset_pct: 20.0,
            bottom_inset_pct: 60.0,
        }
    }
}

impl ObservedBand {
    /// `IntersectionObserver` `rootMargin` for this band.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            self.top_inset_pct, self.bottom_inset_pct
        )
    }

    /// Band edges in pixels for a viewport of height `viewport`.
    pub fn bounds(&self, viewport: f64) -> (f64, f64) {
        let top = viewport * self.top_inset_pct / 100.0;
        let bottom = viewport * (1.0 - self.bottom_inset_pct / 100.0);
        (top, bottom)
    }

    /// Whether an element spanning `top..bottom` (viewport coordinates)
    /// overlaps the band. Threshold 0: any overlap counts.
    pub fn intersects(&self, viewport: f64, top: f64, bottom: f64) -> bool {
        let (band_top, band_bottom) = self.bounds(viewport);
        top < band_bottom && bottom > band_top
    }
}

/// The page-side environment the tracker registers with.
pub trait SectionHost {
    /// Fragment of the current URL without the leading `#`, if any.
    fn current_fragment(&self) -> Option<String>;

    /// Start observing the element with `id`. Returns false when no such
    /// element exists; the id is then never reported.
    fn observe(&mut self, id: &SectionId, band: &ObservedBand) -> bool;

    /// Stop observing every element.
    fn disconnect(&mut self);

    fn listen_fragment_changes(&mut self);

    fn unlisten_fragment_changes(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveState {
    #[default]
    NoActive,
    Active(SectionId),
}

impl ActiveState {
    pub fn id(&self) -> Option<&SectionId> {
        match self {
            ActiveState::NoActive => None,
            ActiveState::Active(id) => Some(id),
        }
    }
}

/// One entry of an intersection batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub id: SectionId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(id: &str) -> Self {
        Self {
            id: SectionId::new(id),
            is_intersecting: true,
        }
    }

    pub fn leaving(id: &str) -> Self {
        Self {
            id: SectionId::new(id),
            is_intersecting: false,
        }
    }
}

/// Active id implied by a URL fragment: the fragment itself, or `home`.
pub fn initial_active(fragment: Option<&str>) -> SectionId {
    match fragment.map(|f| f.trim_start_matches('#')) {
        Some(f) if !f.is_empty() => SectionId::new(f),
        _ => SectionId::home(),
    }
}

/// Unmounted tracker configuration.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    sections: Vec<SectionId>,
    band: ObservedBand,
}

impl ActiveSectionTracker {
    pub fn new(sections: Vec<SectionId>) -> Self {
        Self {
            sections,
            band: ObservedBand::default(),
        }
    }

    pub fn with_band(mut self, band: ObservedBand) -> Self {
        self.band = band;
        self
    }

    /// Register with `host` and read the initial fragment.
    pub fn mount<H: SectionHost>(self, host: H) -> MountedTracker<H> {
        let mut mounted = MountedTracker {
            host,
            band: self.band,
            registered: Vec::with_capacity(self.sections.len()),
            listening: false,
            observing: false,
            state: ActiveState::NoActive,
        };

        // The guard exists before the first registration, so anything
        // registered is released even if a later step unwinds.
        mounted.host.listen_fragment_changes();
        mounted.listening = true;
        mounted.observing = true;
        for id in self.sections {
            if mounted.host.observe(&id, &mounted.band) {
                mounted.registered.push(id);
            }
        }

        let fragment = mounted.host.current_fragment();
        mounted.state = ActiveState::Active(initial_active(fragment.as_deref()));
        mounted
    }
}

/// A tracker registered with its host. Dropping it unregisters.
#[derive(Debug)]
pub struct MountedTracker<H: SectionHost> {
    host: H,
    band: ObservedBand,
    registered: Vec<SectionId>,
    listening: bool,
    observing: bool,
    state: ActiveState,
}

impl<H: SectionHost> MountedTracker<H> {
    pub fn active(&self) -> Option<&SectionId> {
        self.state.id()
    }

    pub fn state(&self) -> &ActiveState {
        &self.state
    }

    /// Sections whose elements were found, in registration order.
    pub fn registered(&self) -> &[SectionId] {
        &self.registered
    }

    pub fn band(&self) -> &ObservedBand {
        &self.band
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// `hashchange`: the new fragment becomes active. An empty fragment
    /// means the top of the page.
    pub fn on_fragment_change(&mut self, fragment: &str) {
        self.state = ActiveState::Active(initial_active(Some(fragment)));
    }

    /// Apply one observer batch. The first registered section (in
    /// registration order) reported as intersecting becomes active. Returns
    /// true when the batch changed the active id.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> bool {
        let hit = self.registered.iter().find(|id| {
            entries
                .iter()
                .any(|e| e.is_intersecting && &e.id == *id)
        });
        match hit {
            Some(id) if self.state.id() != Some(id) => {
                self.state = ActiveState::Active(id.clone());
                true
            }
            _ => false,
        }
    }
}

impl<H: SectionHost> Drop for MountedTracker<H> {
    fn drop(&mut self) {
        if self.listening {
            self.host.unlisten_fragment_changes();
            self.listening = false;
        }
        if self.observing {
            self.host.disconnect();
            self.observing = false;
        }
    }
}

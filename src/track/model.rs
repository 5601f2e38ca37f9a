//! Track model types: `TrackId`, `Item`, `Layout` and `Track`.
//!
//! Extents are measured in terminal columns. Positions are kept as `f32`
//! so sub-cell motion accumulates smoothly between frames; rendering
//! rounds to whole cells.

/// Identifier for a track, assigned by the caller when the track is built.
///
/// The scroller keys its loop bookkeeping on this id instead of storing
/// state on the track itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(pub usize);

/// One visual unit in a track: a label and its fixed extent along the
/// scroll axis. Clones produced for wraparound carry a tag so teardown can
/// remove them without touching originals.
#[derive(Debug, Clone)]
pub struct Item {
    label: String,
    extent: usize,
    clone: bool,
}

impl Item {
    /// Create an original item. The extent is the label width in character
    /// cells plus `gap` trailing columns separating it from the next item.
    pub fn new(label: impl Into<String>, gap: usize) -> Self {
        let label = label.into();
        let extent = label.chars().count() + gap;
        Self {
            label,
            extent,
            clone: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Whether this item is a wraparound clone rather than an original.
    pub fn is_clone(&self) -> bool {
        self.clone
    }

    /// Produce a structurally identical copy tagged as a clone.
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            clone: true,
            ..self.clone()
        }
    }
}

/// Inline layout overrides applied to a track.
///
/// While a loop runs the engine pins the track to a single non-wrapping
/// strip at its full content width; the previous values are captured at
/// start and restored verbatim at stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Lay items out as a single inline strip.
    pub inline: bool,
    /// Whether items may wrap onto following rows when overflowing.
    pub wrap: bool,
    /// Forced content width in columns.
    pub width: Option<f32>,
    /// Minimum width, preventing shrink inside flexible containers.
    pub min_width: Option<f32>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            inline: false,
            wrap: true,
            width: None,
            min_width: None,
        }
    }
}

/// An ordered strip of items rendered consecutively along one axis.
pub struct Track {
    id: TrackId,
    items: Vec<Item>,
    /// Visible window width in columns.
    pub viewport: f32,
    duplicated: bool,
    transform: f32,
    layout: Layout,
}

impl Track {
    /// Create a new track from original items. `viewport` is the width of
    /// the visible window in columns.
    pub fn new(id: TrackId, items: Vec<Item>, viewport: f32) -> Self {
        Self {
            id,
            items,
            viewport,
            duplicated: false,
            transform: 0.0,
            layout: Layout::default(),
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of original (non-clone) items.
    pub fn original_len(&self) -> usize {
        self.items.iter().filter(|i| !i.is_clone()).count()
    }

    /// Number of wraparound clones currently appended.
    pub fn clone_len(&self) -> usize {
        self.items.iter().filter(|i| i.is_clone()).count()
    }

    /// Total width of the strip in columns, clones included.
    pub fn content_width(&self) -> f32 {
        self.items.iter().map(|i| i.extent()).sum::<usize>() as f32
    }

    /// Width of one un-duplicated copy of the content.
    pub fn span_width(&self) -> f32 {
        self.items
            .iter()
            .filter(|i| !i.is_clone())
            .map(|i| i.extent())
            .sum::<usize>() as f32
    }

    pub fn is_duplicated(&self) -> bool {
        self.duplicated
    }

    /// Append one tagged clone per original, in order, directly after the
    /// originals. Translating by one span width then reveals an identical
    /// frame. Idempotent: a second call is a no-op.
    pub(crate) fn duplicate(&mut self) {
        if self.duplicated {
            return;
        }
        let clones: Vec<Item> = self
            .items
            .iter()
            .filter(|i| !i.is_clone())
            .map(Item::duplicate)
            .collect();
        self.items.extend(clones);
        self.duplicated = true;
    }

    /// Remove every clone item and clear the duplication flag. Originals
    /// and their relative order are untouched.
    pub(crate) fn remove_clones(&mut self) {
        self.items.retain(|i| !i.is_clone());
        self.duplicated = false;
    }

    /// Current translation along the scroll axis, in columns.
    pub fn transform(&self) -> f32 {
        self.transform
    }

    pub(crate) fn set_transform(&mut self, offset: f32) {
        self.transform = offset;
    }

    pub(crate) fn clear_transform(&mut self) {
        self.transform = 0.0;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Offset that centers the original item at `index` in the viewport,
    /// for use as a loop's initial offset. Items already left of the
    /// window center, and indices out of range, yield zero.
    pub fn centering_offset(&self, index: usize) -> f32 {
        let mut left = 0usize;
        let mut originals = self.items.iter().filter(|i| !i.is_clone());
        for _ in 0..index {
            match originals.next() {
                Some(item) => left += item.extent(),
                None => return 0.0,
            }
        }
        let Some(item) = originals.next() else {
            return 0.0;
        };

        let center_target = ((self.viewport - item.extent() as f32) / 2.0).max(0.0);
        (left as f32 - center_target).max(0.0)
    }
}

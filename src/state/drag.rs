// Pointer-drag geometry: turns a pointer x coordinate into a selection update
// for whichever handle was grabbed. No DOM access here; the component measures
// the track once at pointer-down and hands the numbers in.
use crate::model::{PERCENT_MAX, SelectionAction};

/// The three interactive zones of the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Left,
    Right,
    /// The filled body between the thumbs; moves both ends together.
    Track,
}

/// Horizontal extent of an element, in px relative to the track's left edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub start: f64,
    pub width: f64,
}

impl Span {
    pub fn end(&self) -> f64 {
        self.start + self.width
    }
}

/// Layout of the track and its children measured at drag start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Client x of the track background's left edge.
    pub origin: f64,
    /// Track background width in px.
    pub width: f64,
    pub left_thumb: Span,
    pub right_thumb: Span,
    pub body: Span,
}

impl TrackGeometry {
    /// False for a track that is not laid out yet (or collapsed), which would
    /// otherwise divide by zero.
    pub fn is_laid_out(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    fn percent(&self, px: f64) -> u32 {
        (px / self.width * 100.0)
            .round()
            .clamp(0.0, PERCENT_MAX as f64) as u32
    }

    /// Client x of the edge a handle is dragged by.
    fn reference_edge(&self, handle: Handle) -> f64 {
        self.origin
            + match handle {
                Handle::Left => self.left_thumb.start,
                Handle::Right => self.right_thumb.end(),
                Handle::Track => self.body.start,
            }
    }
}

/// One pointer-down .. pointer-up gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    handle: Handle,
    shift_x: f64,
    geometry: TrackGeometry,
}

impl DragSession {
    /// Returns `None` when the track has no width; such a drag is a no-op.
    pub fn begin(handle: Handle, pointer_x: f64, geometry: TrackGeometry) -> Option<Self> {
        if !geometry.is_laid_out() || !pointer_x.is_finite() {
            return None;
        }
        Some(Self {
            handle,
            shift_x: pointer_x - geometry.reference_edge(handle),
            geometry,
        })
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Clamped px position of the grabbed element's reference edge.
    pub fn position(&self, pointer_x: f64) -> f64 {
        let g = &self.geometry;
        let x = pointer_x - self.shift_x - g.origin;
        match self.handle {
            Handle::Left => x.min(g.right_thumb.start - g.right_thumb.width).max(0.0),
            Handle::Right => x.max(g.left_thumb.end() + g.left_thumb.width).min(g.width),
            Handle::Track => x.min(g.width - g.body.width).max(0.0),
        }
    }

    pub fn action_for(&self, pointer_x: f64) -> Option<SelectionAction> {
        if !pointer_x.is_finite() {
            return None;
        }
        let percent = self.geometry.percent(self.position(pointer_x));
        Some(match self.handle {
            Handle::Left => SelectionAction::MoveMin(percent),
            Handle::Right => SelectionAction::MoveMax(percent),
            Handle::Track => SelectionAction::MoveTrack(percent),
        })
    }
}

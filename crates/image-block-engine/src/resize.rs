//! Drag-to-resize.
//!
//! A drag runs from a press on one of the two edge handles to the next
//! pointer release anywhere on the input surface. Every move turns the
//! horizontal pointer delta into a candidate width; accepted widths are
//! committed as a percentage of the parent container so the image keeps its
//! proportion when the container itself is resized.

use std::rc::Rc;

use crate::surface::{BlockId, InputSurface, PointerCapture};

/// Extra room kept above the configured minimum so the handles stay grabbable
pub const HANDLE_MARGIN_PX: f64 = 80.0;

/// Side of the image a handle sits on (start = left in a left-to-right layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width accepted by a pointer move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthCommit {
    pub width_px: f64,
    pub percent: f64,
}

impl WidthCommit {
    /// Inline style value, e.g. `70%`
    pub fn css(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// Why a move left the width alone. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ExceedsParent,
    BelowFloor,
    NoProgress,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No drag in progress
    Idle,
    Committed(WidthCommit),
    Rejected(Rejection),
}

struct DragSession {
    edge: Edge,
    origin: Point,
    start_width_px: f64,
    parent_width_px: f64,
    _capture: PointerCapture,
}

pub struct ResizeEngine {
    block: BlockId,
    surface: Rc<dyn InputSurface>,
    min_width: f64,
    session: Option<DragSession>,
}

impl ResizeEngine {
    pub fn new(block: BlockId, surface: Rc<dyn InputSurface>, min_width: f64) -> Self {
        Self {
            block,
            surface,
            min_width,
            session: None,
        }
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Smallest candidate width a move may produce
    pub fn floor(&self) -> f64 {
        self.min_width + HANDLE_MARGIN_PX
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_edge(&self) -> Option<Edge> {
        self.session.as_ref().map(|s| s.edge)
    }

    /// Start a drag. Widths are measured by the host at press time.
    pub fn press(&mut self, edge: Edge, pointer: Point, wrapper_width_px: f64, parent_width_px: f64) {
        // A stale session must release its capture before a new one subscribes
        self.session = None;

        log::debug!(
            "Resize started on {edge:?} edge at {wrapper_width_px}px of {parent_width_px}px"
        );
        self.session = Some(DragSession {
            edge,
            origin: pointer,
            start_width_px: wrapper_width_px,
            parent_width_px,
            _capture: PointerCapture::acquire(Rc::clone(&self.surface), self.block),
        });
    }

    /// Feed one pointer move. Runs on every input event while dragging.
    pub fn pointer_move(&mut self, pointer: Point) -> MoveOutcome {
        let min_width = self.min_width;
        let floor = self.floor();
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Idle;
        };

        let dx = match session.edge {
            Edge::Start => session.origin.x - pointer.x,
            Edge::End => pointer.x - session.origin.x,
        };
        let candidate = session.start_width_px + dx;
        session.origin = pointer;

        if candidate > session.parent_width_px {
            return MoveOutcome::Rejected(Rejection::ExceedsParent);
        }
        if candidate < floor {
            return MoveOutcome::Rejected(Rejection::BelowFloor);
        }

        let grew = dx > 0.0 && candidate > session.start_width_px;
        let shrank = dx < 0.0 && candidate >= min_width;
        if !(grew || shrank) {
            return MoveOutcome::Rejected(Rejection::NoProgress);
        }

        session.start_width_px = candidate;
        MoveOutcome::Committed(WidthCommit {
            width_px: candidate,
            percent: candidate * 100.0 / session.parent_width_px,
        })
    }

    /// End the drag. Returns whether one was in progress.
    pub fn release(&mut self) -> bool {
        self.session.take().is_some()
    }
}

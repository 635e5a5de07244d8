//! Tongue chain state machine
//!
//! A tongue is a singly linked chain of segments grown one segment per frame
//! from the tip. Segment `i` owns segment `i + 1`; the chain is stored as a
//! vector in that order, root first.
//!
//! Per frame, only the tip decides anything. Every segment before it is
//! still extending and just hands the frame on to its successor. The tip
//! then either grows a successor, or reports `Inactive`, in which case its
//! owner drops it and becomes the new tip, already retracting. A retracting
//! tip reports `Inactive` on its next evaluation, so a released tongue
//! shrinks by exactly one segment per frame.

use log::{debug, trace};

use super::collision::{CollisionGroup, SegmentId};
use super::controls::InputState;
use super::entity::{Body, Entity};
use crate::renderer::Surface;

/// Result of advancing a segment or a whole chain by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Still alive
    Continue,
    /// Should no longer exist; the caller drops it
    Inactive,
}

/// Per-segment state. `Retracting` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Extending,
    Retracting,
}

/// What the tip decided this frame
#[derive(Debug)]
enum TipStep {
    Grow(TongueSegment),
    Collapse,
}

/// One link of the tongue
#[derive(Debug, Clone)]
pub struct TongueSegment {
    id: SegmentId,
    body: Body,
    state: SegmentState,
}

impl TongueSegment {
    /// Build a segment and add it to `group`.
    ///
    /// Overlap is tested against the group as it was before insertion. A
    /// segment spawned on top of an earlier one starts out retracting.
    pub fn spawn(body: Body, group: &mut CollisionGroup) -> Self {
        let bounds = body.bounds();
        let collided = group.overlaps(&bounds, None);
        let id = group.insert(bounds);
        if collided {
            debug!(
                "Tongue segment {:?} folded onto itself at ({:.1}, {:.1})",
                id, bounds.position.x, bounds.position.y
            );
        } else {
            trace!("Tongue segment {:?} spawned facing {}", id, body.direction.as_str());
        }
        let state = if collided {
            SegmentState::Retracting
        } else {
            SegmentState::Extending
        };
        Self { id, body, state }
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn is_retracting(&self) -> bool {
        self.state == SegmentState::Retracting
    }

    pub fn state(&self) -> SegmentState {
        self.state
    }

    /// One-way: there is no way back to extending
    pub fn mark_retracting(&mut self) {
        self.state = SegmentState::Retracting;
    }

    /// Whether this segment, as the tip, must go this frame
    fn must_collapse(&self, input: &dyn InputState, group: &CollisionGroup) -> bool {
        !self.body.key_bindings.extend_held(input)
            || self.is_retracting()
            || group.overlaps(&self.body.bounds(), Some(self.id))
    }

    /// Evaluate this segment as the tip of its chain
    fn advance_tip(&mut self, input: &dyn InputState, group: &mut CollisionGroup) -> TipStep {
        if self.must_collapse(input, group) {
            return TipStep::Collapse;
        }

        if let Some(direction) = self
            .body
            .key_bindings
            .resolve_direction(self.body.direction, input)
        {
            self.body.direction = direction;
        }

        let mut next = self.body.clone();
        next.position = self
            .body
            .bounds()
            .beside(self.body.direction, self.body.size)
            .position;
        TipStep::Grow(TongueSegment::spawn(next, group))
    }
}

impl Entity for TongueSegment {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// A live tongue: at least one segment while it exists
#[derive(Debug, Clone)]
pub struct TongueChain {
    /// Root first; each segment owns the next
    segments: Vec<TongueSegment>,
}

impl TongueChain {
    /// Start a chain with a single head segment
    pub fn launch(head: Body, group: &mut CollisionGroup) -> Self {
        Self {
            segments: vec![TongueSegment::spawn(head, group)],
        }
    }

    /// Advance the chain by one frame.
    ///
    /// Returns `Inactive` once the head itself has been removed; the owner
    /// must then drop the chain.
    pub fn update(&mut self, input: &dyn InputState, group: &mut CollisionGroup) -> ChainOutcome {
        let Some(tip) = self.segments.last_mut() else {
            return ChainOutcome::Inactive;
        };

        match tip.advance_tip(input, group) {
            TipStep::Grow(next) => {
                self.segments.push(next);
                ChainOutcome::Continue
            }
            TipStep::Collapse => {
                if let Some(removed) = self.segments.pop() {
                    group.remove(removed.id);
                    trace!("Tongue segment {:?} removed", removed.id);
                }
                match self.segments.last_mut() {
                    Some(new_tip) => {
                        new_tip.mark_retracting();
                        ChainOutcome::Continue
                    }
                    None => ChainOutcome::Inactive,
                }
            }
        }
    }

    /// Draw tip first and root last, so the root is never hidden by the tip
    pub fn render(&self, surface: &mut dyn Surface) {
        for segment in self.segments.iter().rev() {
            segment.render(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[TongueSegment] {
        &self.segments
    }

    pub fn head(&self) -> Option<&TongueSegment> {
        self.segments.first()
    }

    pub fn tip(&self) -> Option<&TongueSegment> {
        self.segments.last()
    }

    /// Whether the chain has started collapsing
    pub fn is_retracting(&self) -> bool {
        self.tip().is_some_and(TongueSegment::is_retracting)
    }
}

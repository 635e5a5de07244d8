//! Per-creature collision group for tongue self-overlap
//!
//! The group holds the bounds of every live segment of one chain. A new tip
//! is tested against all of them, not just its neighbour, because the tongue
//! can fold back onto itself.

use super::geometry::Bounds;

/// Handle for a segment's membership in a `CollisionGroup`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u32);

#[derive(Debug, Clone, Default)]
pub struct CollisionGroup {
    /// Insertion order is chain order, root first
    members: Vec<(SegmentId, Bounds)>,
    next_id: u32,
}

impl CollisionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member and return its handle
    pub fn insert(&mut self, bounds: Bounds) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        self.members.push((id, bounds));
        id
    }

    /// Remove a member. Returns false if it was not present.
    pub fn remove(&mut self, id: SegmentId) -> bool {
        match self.members.iter().rposition(|(member, _)| *member == id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `bounds` overlaps any member other than `except`
    pub fn overlaps(&self, bounds: &Bounds, except: Option<SegmentId>) -> bool {
        self.members
            .iter()
            .filter(|(member, _)| Some(*member) != except)
            .any(|(_, other)| other.overlaps(bounds))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

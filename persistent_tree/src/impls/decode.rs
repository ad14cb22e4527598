use super::{Arena, NodeId, PersistentSegmentTree, Segment, Value};
use crate::InvalidTree;
use serde::Deserialize;

/// The serialized layout of [`PersistentSegmentTree`], checked before use.
#[derive(Deserialize)]
pub(crate) struct RawTree<V> {
    arena: Arena<V>,
    versions: Vec<NodeId>,
    len: usize,
}

impl<V: Value> TryFrom<RawTree<V>> for PersistentSegmentTree<V> {
    type Error = InvalidTree;

    fn try_from(raw: RawTree<V>) -> Result<Self, InvalidTree> {
        if raw.len == 0 {
            return Err(InvalidTree::EmptyTree);
        }
        if raw.versions.is_empty() {
            return Err(InvalidTree::NoVersions);
        }
        let mut checker = ShapeChecker {
            arena: &raw.arena,
            seen: vec![None; raw.arena.len()],
        };
        for &root in &raw.versions {
            checker.check(root, Segment::root(raw.len))?;
        }
        Ok(Self {
            arena: raw.arena,
            versions: raw.versions,
            len: raw.len,
        })
    }
}

// visits each node once; a shared node must cover the same range everywhere
struct ShapeChecker<'a, V> {
    arena: &'a Arena<V>,
    seen: Vec<Option<Segment>>,
}

impl<V: Value> ShapeChecker<'_, V> {
    fn check(&mut self, node: NodeId, segment: Segment) -> Result<(), InvalidTree> {
        let count = self.arena.len();
        if node >= count {
            return Err(InvalidTree::DanglingNode { node, count });
        }
        let shape = InvalidTree::Shape {
            node,
            start: segment.start,
            end: segment.end,
        };
        match self.seen[node] {
            Some(seen) if seen == segment => return Ok(()),
            Some(_) => return Err(shape),
            None => self.seen[node] = Some(segment),
        }
        match (self.arena.children(node), segment.is_leaf()) {
            (None, true) => Ok(()),
            (Some((left, right)), false) => {
                let (left_segment, right_segment) = segment.split();
                self.check(left, left_segment)?;
                self.check(right, right_segment)?;
                if self.arena.sum(left, right) == Some(self.arena.value(node)) {
                    Ok(())
                } else {
                    Err(InvalidTree::Sum { node })
                }
            }
            _ => Err(shape),
        }
    }
}

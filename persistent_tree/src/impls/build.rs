use super::{overflow, Arena, NodeId, OutOfRange, PersistentSegmentTree, Result, Segment, Value};
use tracing::debug;

impl<V: Value> PersistentSegmentTree<V> {
    /// Builds version 0 of a tree holding `len` zeros.
    pub fn with_len(len: usize) -> Result<Self> {
        Self::build(len, |_| V::zero())
    }

    /// Builds version 0 of a tree holding `values`.
    pub fn from_values(values: &[V]) -> Result<Self> {
        Self::build(values.len(), |index| values[index])
    }

    pub fn from_iter_values<I: IntoIterator<Item = V>>(values: I) -> Result<Self> {
        let values: Vec<V> = values.into_iter().collect();
        Self::from_values(&values)
    }

    fn build<F: Fn(usize) -> V>(len: usize, leaf_value: F) -> Result<Self> {
        if len == 0 {
            return Err(OutOfRange::EmptyTree);
        }
        // a full range tree over `len` leaves has exactly `2 * len - 1` nodes
        let mut arena = Arena::with_capacity(2 * len - 1);
        let root = build_node(&mut arena, Segment::root(len), &leaf_value)?;
        debug!(len, nodes = arena.len(), "built persistent segment tree");
        Ok(Self::from_parts(arena, root, len))
    }
}

fn build_node<V: Value, F: Fn(usize) -> V>(
    arena: &mut Arena<V>,
    segment: Segment,
    leaf_value: &F,
) -> Result<NodeId> {
    if segment.is_leaf() {
        return Ok(arena.leaf(leaf_value(segment.start)));
    }
    let (left, right) = segment.split();
    let left = build_node(arena, left, leaf_value)?;
    let right = build_node(arena, right, leaf_value)?;
    arena.branch(left, right).ok_or_else(|| overflow(segment))
}

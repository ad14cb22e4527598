use super::{NodeId, OutOfRange, PersistentSegmentTree, Result, Segment, Value, VersionId};
use std::ops::{Bound, RangeBounds};

impl<V: Value> PersistentSegmentTree<V> {
    /// Sum of the elements in `[start, end)` as they were in `version`.
    ///
    /// An empty range sums to zero. Fails if `version` isn't published, if
    /// the range is inverted or runs past the end of the array, or if the
    /// sum doesn't fit in `V`.
    pub fn query(&self, version: VersionId, start: usize, end: usize) -> Result<V> {
        let root = self.root_node(version)?;
        self.check_range(start, end)?;
        self.sum(root, self.root(), start, end)
    }

    /// Like [`query`](Self::query), taking any range expression over indices.
    pub fn query_range<R: RangeBounds<usize>>(&self, version: VersionId, range: R) -> Result<V> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        self.query(version, start, end)
    }

    pub fn get(&self, version: VersionId, index: usize) -> Result<V> {
        let root = self.root_node(version)?;
        self.check_index(index)?;
        self.sum(root, self.root(), index, index + 1)
    }

    pub fn total(&self, version: VersionId) -> Result<V> {
        let root = self.root_node(version)?;
        Ok(self.arena.value(root))
    }

    /// Materializes the whole array of `version`, in index order.
    pub fn values(&self, version: VersionId) -> Result<Vec<V>> {
        let root = self.root_node(version)?;
        let mut values = Vec::with_capacity(self.len);
        self.collect_leaves(root, &mut values);
        Ok(values)
    }

    fn sum(&self, node: NodeId, segment: Segment, start: usize, end: usize) -> Result<V> {
        if segment.covered_by(start, end) {
            return Ok(self.arena.value(node));
        }
        if segment.disjoint_from(start, end) {
            return Ok(V::zero());
        }
        match self.arena.children(node) {
            Some((left, right)) => {
                let (left_segment, right_segment) = segment.split();
                let left = self.sum(left, left_segment, start, end)?;
                let right = self.sum(right, right_segment, start, end)?;
                // cached node sums fit, but a sum across two subtrees may not
                left.checked_add(&right).ok_or(OutOfRange::Overflow { start, end })
            }
            // a leaf is always either covered or disjoint
            None => Ok(V::zero()),
        }
    }

    fn collect_leaves(&self, node: NodeId, values: &mut Vec<V>) {
        match self.arena.children(node) {
            Some((left, right)) => {
                self.collect_leaves(left, values);
                self.collect_leaves(right, values);
            }
            None => values.push(self.arena.value(node)),
        }
    }
}

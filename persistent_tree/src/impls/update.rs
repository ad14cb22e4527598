use super::{overflow, NodeId, PersistentSegmentTree, Result, Segment, Value, VersionId};
use tracing::debug;

impl<V: Value> PersistentSegmentTree<V> {
    /// Publishes a new version equal to `version` except that `index` holds
    /// `value`, and returns its id.
    ///
    /// Only the nodes on the path to `index` are allocated; every other
    /// subtree is shared with `version`. On error nothing is published and
    /// no node is allocated.
    pub fn update(&mut self, version: VersionId, index: usize, value: V) -> Result<VersionId> {
        let root = self.root_node(version)?;
        self.check_index(index)?;
        self.path_sum(root, self.root(), index, value)?;
        let new_root = self.rebuild_path(root, self.root(), index, value)?;
        self.versions.push(new_root);
        let new_version = self.latest_version();
        debug!(%version, %new_version, index, "published version");
        Ok(new_version)
    }

    /// Applies an update on top of the most recent version.
    pub fn update_latest(&mut self, index: usize, value: V) -> Result<VersionId> {
        self.update(self.latest_version(), index, value)
    }

    // the would-be sum of `node` after the update, without allocating
    fn path_sum(&self, node: NodeId, segment: Segment, index: usize, value: V) -> Result<V> {
        let (left, right) = match self.arena.children(node) {
            Some(children) => children,
            None => return Ok(value),
        };
        let (left_segment, right_segment) = segment.split();
        let sum = if index < left_segment.end {
            let left = self.path_sum(left, left_segment, index, value)?;
            left.checked_add(&self.arena.value(right))
        } else {
            let right = self.path_sum(right, right_segment, index, value)?;
            self.arena.value(left).checked_add(&right)
        };
        sum.ok_or_else(|| overflow(segment))
    }

    // path sums are checked by `path_sum` before this runs
    fn rebuild_path(
        &mut self,
        node: NodeId,
        segment: Segment,
        index: usize,
        value: V,
    ) -> Result<NodeId> {
        let (left, right) = match self.arena.children(node) {
            Some(children) => children,
            None => return Ok(self.arena.leaf(value)),
        };
        let (left_segment, right_segment) = segment.split();
        let branch = if index < left_segment.end {
            let left = self.rebuild_path(left, left_segment, index, value)?;
            self.arena.branch(left, right)
        } else {
            let right = self.rebuild_path(right, right_segment, index, value)?;
            self.arena.branch(left, right)
        };
        branch.ok_or_else(|| overflow(segment))
    }
}

mod build;
mod decode;
mod query;
mod update;

pub(crate) use decode::RawTree;

use super::arena::{Arena, NodeId};
use super::segment::Segment;
use super::{OutOfRange, PersistentSegmentTree, Result, Value, VersionId};

impl<V: Value> PersistentSegmentTree<V> {
    /// Number of elements, fixed at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: both constructors reject empty arrays, and so does
    /// deserialization.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    pub fn latest_version(&self) -> VersionId {
        VersionId::from(self.versions.len() - 1)
    }

    pub fn versions(&self) -> impl Iterator<Item = VersionId> + '_ {
        (0..self.versions.len()).map(VersionId::from)
    }

    /// Total number of nodes allocated across all versions.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn root(&self) -> Segment {
        Segment::root(self.len)
    }

    fn root_node(&self, version: VersionId) -> Result<NodeId> {
        self.versions
            .get(version.index())
            .copied()
            .ok_or(OutOfRange::Version {
                version,
                count: self.versions.len(),
            })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(OutOfRange::Index {
                index,
                len: self.len,
            })
        }
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start <= end && end <= self.len {
            Ok(())
        } else {
            Err(OutOfRange::Range {
                start,
                end,
                len: self.len,
            })
        }
    }

    fn from_parts(arena: Arena<V>, root: NodeId, len: usize) -> Self {
        Self {
            arena,
            versions: vec![root],
            len,
        }
    }
}

fn overflow(segment: Segment) -> OutOfRange {
    OutOfRange::Overflow {
        start: segment.start,
        end: segment.end,
    }
}

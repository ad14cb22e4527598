use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a published version of the tree.
///
/// Ids are handed out densely in creation order: the initial build is
/// [`VersionId::INITIAL`] and the `k`-th successful update yields `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionId(usize);

impl VersionId {
    pub const INITIAL: Self = VersionId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VersionId {
    fn from(index: usize) -> Self {
        VersionId(index)
    }
}

impl From<VersionId> for usize {
    fn from(version: VersionId) -> Self {
        version.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

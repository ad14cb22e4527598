use super::VersionId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OutOfRange>;

/// Rejected input. Every variant is reported before the tree is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutOfRange {
    #[error("index {index} is out of range for a tree of length {len}")]
    Index { index: usize, len: usize },

    #[error("range {start}..{end} is out of range for a tree of length {len}")]
    Range { start: usize, end: usize, len: usize },

    #[error("version {version} is not published (only {count} versions exist)")]
    Version { version: VersionId, count: usize },

    #[error("a tree must hold at least one element")]
    EmptyTree,

    #[error("the sum over {start}..{end} overflows the value type")]
    Overflow { start: usize, end: usize },
}

/// A decoded tree that breaks the invariants the constructors establish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTree {
    #[error("a tree must hold at least one element")]
    EmptyTree,

    #[error("a tree must hold at least one version")]
    NoVersions,

    #[error("node {node} is referenced but only {count} nodes exist")]
    DanglingNode { node: usize, count: usize },

    #[error("node {node} does not have the shape of range {start}..{end}")]
    Shape { node: usize, start: usize, end: usize },

    #[error("node {node} does not hold the sum of its children")]
    Sum { node: usize },
}

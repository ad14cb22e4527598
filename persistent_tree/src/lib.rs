//! A persistent segment tree over a fixed-size array.
//!
//! Every [`update`](PersistentSegmentTree::update) produces a new version and
//! leaves all earlier versions readable. Only the nodes on the path from the
//! root to the changed leaf are allocated; every other subtree is shared with
//! the version the update started from.
//!
//! ```
//! use persistent_tree::{PersistentSegmentTree, VersionId};
//!
//! let mut tree = PersistentSegmentTree::from_values(&[1, 2, 3, 4, 5]).unwrap();
//! let v1 = tree.update(VersionId::INITIAL, 0, 2).unwrap();
//! assert_eq!(tree.query(VersionId::INITIAL, 0, 5).unwrap(), 15);
//! assert_eq!(tree.query(v1, 0, 5).unwrap(), 16);
//! ```

mod arena;
mod error;
mod impls;
mod segment;
mod traits;
mod value;
mod version;

use arena::{Arena, NodeId};
pub use error::{InvalidTree, OutOfRange, Result};
use serde::{Deserialize, Serialize};
pub use traits::Zero;
pub use value::Value;
pub use version::VersionId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "impls::RawTree<V>")]
pub struct PersistentSegmentTree<V: Value = i64> {
    arena: Arena<V>,
    versions: Vec<NodeId>,
    len: usize,
}

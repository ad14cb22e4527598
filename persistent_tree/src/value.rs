use super::Zero;
use num_traits::CheckedAdd;

/// An element type the tree can store and sum without overflowing silently.
pub trait Value: Zero + Copy + PartialEq + CheckedAdd {}

impl<V> Value for V where V: Zero + Copy + PartialEq + CheckedAdd {}

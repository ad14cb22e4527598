/// The half-open index range `[start, end)` summarized by a node.
///
/// Ranges are not stored in the arena; they are recomputed on the way down
/// from the root, which always covers `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn root(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    pub fn is_leaf(&self) -> bool {
        self.end - self.start == 1
    }

    pub fn mid(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }

    // both halves are non-empty whenever the segment isn't a leaf
    pub fn split(&self) -> (Segment, Segment) {
        let mid = self.mid();
        (
            Segment {
                start: self.start,
                end: mid,
            },
            Segment {
                start: mid,
                end: self.end,
            },
        )
    }

    pub fn covered_by(&self, start: usize, end: usize) -> bool {
        start <= self.start && self.end <= end
    }

    pub fn disjoint_from(&self, start: usize, end: usize) -> bool {
        self.end <= start || end <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_odd_length() {
        let (left, right) = Segment::root(5).split();
        assert_eq!(left, Segment { start: 0, end: 2 });
        assert_eq!(right, Segment { start: 2, end: 5 });
    }

    #[test]
    fn split_halves_are_never_empty() {
        for len in 2..64 {
            let (left, right) = Segment::root(len).split();
            assert!(left.end > left.start);
            assert!(right.end > right.start);
        }
    }

    #[test]
    fn coverage() {
        let segment = Segment { start: 2, end: 4 };
        assert!(segment.covered_by(0, 5));
        assert!(segment.covered_by(2, 4));
        assert!(!segment.covered_by(3, 5));
        assert!(segment.disjoint_from(4, 6));
        assert!(segment.disjoint_from(0, 2));
        assert!(!segment.disjoint_from(3, 3));
        assert!(!segment.disjoint_from(1, 3));
    }
}

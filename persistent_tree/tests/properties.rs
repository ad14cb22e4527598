use persistent_tree::{OutOfRange, PersistentSegmentTree, VersionId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values<R: Rng>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1000..1000)).collect()
}

fn naive_sum(values: &[i64], start: usize, end: usize) -> i64 {
    values[start..end].iter().sum()
}

// depth of the leaf for `index` in a tree over `len` elements
fn leaf_depth(len: usize, index: usize) -> usize {
    let (mut start, mut end, mut depth) = (0, len, 0);
    while end - start > 1 {
        let mid = start + (end - start) / 2;
        if index < mid {
            end = mid;
        } else {
            start = mid;
        }
        depth += 1;
    }
    depth
}

#[test]
fn build_correctness() {
    let mut rng = StdRng::seed_from_u64(1);
    for len in 1..40 {
        let values = random_values(&mut rng, len);
        let tree = PersistentSegmentTree::from_values(&values).unwrap();
        for (index, &value) in values.iter().enumerate() {
            assert_eq!(tree.query(VersionId::INITIAL, index, index + 1).unwrap(), value);
        }
    }
}

#[test]
fn additivity_and_empty_ranges() {
    let mut rng = StdRng::seed_from_u64(2);
    let values = random_values(&mut rng, 23);
    let mut tree = PersistentSegmentTree::from_values(&values).unwrap();
    tree.update(VersionId::INITIAL, 11, 500).unwrap();
    for version in tree.versions() {
        for start in 0..=values.len() {
            assert_eq!(tree.query(version, start, start).unwrap(), 0);
            for mid in start..=values.len() {
                let end = rng.gen_range(mid..=values.len());
                assert_eq!(
                    tree.query(version, start, end).unwrap(),
                    tree.query(version, start, mid).unwrap() + tree.query(version, mid, end).unwrap()
                );
            }
        }
    }
}

#[test]
fn update_isolation() {
    let mut rng = StdRng::seed_from_u64(3);
    let values = random_values(&mut rng, 17);
    let mut tree = PersistentSegmentTree::from_values(&values).unwrap();
    for _ in 0..50 {
        let source = VersionId::from(rng.gen_range(0..tree.version_count()));
        let index = rng.gen_range(0..values.len());
        let value = rng.gen_range(-1000..1000);
        let before = tree.values(source).unwrap();

        let target = tree.update(source, index, value).unwrap();

        assert_eq!(tree.values(source).unwrap(), before);
        assert_eq!(tree.query(target, index, index + 1).unwrap(), value);
        for other in (0..values.len()).filter(|&other| other != index) {
            assert_eq!(
                tree.query(target, other, other + 1).unwrap(),
                tree.query(source, other, other + 1).unwrap()
            );
        }
    }
}

#[test]
fn differential_against_vec_history() {
    let mut rng = StdRng::seed_from_u64(4);
    let len = 37;
    let mut history = vec![random_values(&mut rng, len)];
    let mut tree = PersistentSegmentTree::from_values(&history[0]).unwrap();

    for step in 1..=200 {
        let source = rng.gen_range(0..history.len());
        let index = rng.gen_range(0..len);
        let value = rng.gen_range(-1000..1000);
        let mut next = history[source].clone();
        next[index] = value;
        history.push(next);

        let version = tree.update(VersionId::from(source), index, value).unwrap();
        assert_eq!(version, VersionId::from(step));
    }

    for (version, values) in history.iter().enumerate() {
        let version = VersionId::from(version);
        for _ in 0..20 {
            let start = rng.gen_range(0..=len);
            let end = rng.gen_range(start..=len);
            assert_eq!(tree.query(version, start, end).unwrap(), naive_sum(values, start, end));
        }
        assert_eq!(&tree.values(version).unwrap(), values);
    }
}

#[test]
fn updates_allocate_only_the_path() {
    let mut rng = StdRng::seed_from_u64(5);
    for len in [1, 2, 5, 8, 13, 64, 100] {
        let mut tree = PersistentSegmentTree::<i64>::with_len(len).unwrap();
        assert_eq!(tree.node_count(), 2 * len - 1);
        for _ in 0..10 {
            let index = rng.gen_range(0..len);
            let nodes = tree.node_count();
            tree.update_latest(index, 1).unwrap();
            assert_eq!(tree.node_count() - nodes, leaf_depth(len, index) + 1);
        }
    }
}

#[test]
fn rejected_updates_leave_state_untouched() {
    let mut tree = PersistentSegmentTree::from_values(&[5, 6, 7]).unwrap();
    let v1 = tree.update(VersionId::INITIAL, 1, 0).unwrap();
    let nodes = tree.node_count();

    for index in [3, 4, usize::MAX] {
        assert_eq!(
            tree.update(v1, index, 1).unwrap_err(),
            OutOfRange::Index { index, len: 3 }
        );
    }
    assert!(tree.update(VersionId::from(2), 0, 1).is_err());

    assert_eq!(tree.version_count(), 2);
    assert_eq!(tree.node_count(), nodes);
    assert_eq!(tree.values(VersionId::INITIAL).unwrap(), vec![5, 6, 7]);
    assert_eq!(tree.values(v1).unwrap(), vec![5, 0, 7]);
    assert_eq!(tree.update(v1, 2, 1).unwrap(), VersionId::from(2));
}

#[test]
fn concurrent_queries_agree() {
    let mut rng = StdRng::seed_from_u64(6);
    let values = random_values(&mut rng, 50);
    let mut tree = PersistentSegmentTree::from_values(&values).unwrap();
    for _ in 0..20 {
        let index = rng.gen_range(0..values.len());
        tree.update_latest(index, rng.gen_range(-1000..1000)).unwrap();
    }
    let expected: Vec<i64> = tree.versions().map(|v| tree.total(v).unwrap()).collect();

    let tree = &tree;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    tree.versions()
                        .map(|v| tree.query(v, 0, tree.len()).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

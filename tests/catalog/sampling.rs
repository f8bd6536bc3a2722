//! Tests for random sampling

use std::collections::HashSet;

use proptest::prelude::*;
use zhuyin_catalog::Catalog;
use zhuyin_foundation::{LtSet, SeededRandom, VocabId};

#[test]
fn sample_everything_left() {
    let catalog = Catalog::builtin();
    let exclude: LtSet<VocabId> = catalog.iter().skip(3).map(|i| i.id.clone()).collect();
    let sample = catalog.random_sample(10, &exclude, &mut SeededRandom::new(0));
    assert_eq!(sample.len(), 3);
}

#[test]
fn sample_nothing() {
    let catalog = Catalog::builtin();
    let sample = catalog.random_sample(0, &LtSet::new(), &mut SeededRandom::new(0));
    assert!(sample.is_empty());
}

#[test]
fn same_seed_same_sample() {
    let catalog = Catalog::builtin();
    let a = catalog.random_sample(5, &LtSet::new(), &mut SeededRandom::new(31));
    let b = catalog.random_sample(5, &LtSet::new(), &mut SeededRandom::new(31));
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn sample_is_distinct_excluded_and_sized(
        n in 0usize..60,
        excluded in prop::collection::hash_set(0usize..50, 0..50),
        seed in any::<u64>()
    ) {
        let catalog = Catalog::builtin();
        let exclude: LtSet<VocabId> = catalog
            .iter()
            .enumerate()
            .filter(|(i, _)| excluded.contains(i))
            .map(|(_, item)| item.id.clone())
            .collect();

        let sample = catalog.random_sample(n, &exclude, &mut SeededRandom::new(seed));

        let eligible = catalog.len() - exclude.len();
        prop_assert_eq!(sample.len(), n.min(eligible));
        let ids: HashSet<_> = sample.iter().map(|item| item.id.clone()).collect();
        prop_assert_eq!(ids.len(), sample.len());
        prop_assert!(sample.iter().all(|item| !exclude.contains(&item.id)));
    }
}

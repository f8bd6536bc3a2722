//! Validated vocabulary storage with lookup and sampling.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use zhuyin_foundation::{Error, ErrorContext, LtSet, RandomSource, Result, VocabId};

use crate::builtin;
use crate::category::Category;
use crate::item::VocabularyItem;

/// An immutable set of vocabulary items with unique ids.
///
/// Items are stored behind `Arc` so questions can hold on to the word they
/// ask about without copying it.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Items in declaration order.
    items: Vec<Arc<VocabularyItem>>,
    /// Id -> position in `items`.
    index: HashMap<VocabId, usize>,
}

impl Catalog {
    /// Builds a catalog, checking every item and rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, with the offending entry's
    /// position attached as context.
    pub fn new(items: impl IntoIterator<Item = VocabularyItem>) -> Result<Self> {
        let items: Vec<VocabularyItem> = items.into_iter().collect();
        let mut seen = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            let context = || {
                ErrorContext::new()
                    .with_source("catalog")
                    .with_index(position)
            };
            item.validate().map_err(|e| e.with_context(context()))?;
            if seen.insert(item.id.clone(), position).is_some() {
                return Err(Error::duplicate_id(item.id.as_str()).with_context(context()));
            }
        }

        Ok(Self::assemble(items))
    }

    /// The fifty-word catalog shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        Self::assemble(builtin::items())
    }

    fn assemble(items: Vec<VocabularyItem>) -> Self {
        let items: Vec<_> = items.into_iter().map(Arc::new).collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
        tracing::debug!(items = items.len(), "assembled vocabulary catalog");
        Self { items, index }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over all items in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<VocabularyItem>> {
        self.items.iter()
    }

    /// Returns every item in `category`.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<Arc<VocabularyItem>> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    /// Returns every item whose category tag is `name`.
    ///
    /// An unknown tag is not an error; it simply matches nothing.
    #[must_use]
    pub fn by_category_name(&self, name: &str) -> Vec<Arc<VocabularyItem>> {
        Category::from_name(name)
            .map(|category| self.by_category(category))
            .unwrap_or_default()
    }

    /// Looks up an item by exact id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Arc<VocabularyItem>> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Returns the categories that have at least one item.
    #[must_use]
    pub fn categories(&self) -> BTreeSet<Category> {
        self.items.iter().map(|item| item.category).collect()
    }

    /// Draws up to `n` distinct items whose ids are not in `exclude`.
    ///
    /// Every eligible item is equally likely to be drawn and the result is in
    /// random order. When fewer than `n` items are eligible, all of them are
    /// returned; the result is never padded.
    #[must_use]
    pub fn random_sample(
        &self,
        n: usize,
        exclude: &LtSet<VocabId>,
        rng: &mut dyn RandomSource,
    ) -> Vec<Arc<VocabularyItem>> {
        let mut eligible: Vec<_> = self
            .items
            .iter()
            .filter(|item| !exclude.contains(&item.id))
            .cloned()
            .collect();

        // Partial Fisher-Yates: only the first `take` slots need settling.
        let take = n.min(eligible.len());
        for i in 0..take {
            let j = i + rng.below(eligible.len() - i);
            eligible.swap(i, j);
        }
        eligible.truncate(take);

        if take < n {
            tracing::debug!(requested = n, returned = take, "vocabulary sample short");
        }
        eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zhuyin_foundation::{ErrorKind, ScriptedRandom, SeededRandom};

    fn small() -> Catalog {
        Catalog::new([
            VocabularyItem::new("dog", "狗", ["ㄍㄡˇ"], "dog.png", Category::Animal),
            VocabularyItem::new("cat", "貓", ["ㄇㄠ"], "cat.png", Category::Animal),
            VocabularyItem::new("sun", "太陽", ["ㄊㄞˋ", "ㄧㄤˊ"], "sun.png", Category::Nature),
        ])
        .unwrap()
    }

    #[test]
    fn builtin_passes_validation() {
        let catalog = Catalog::new(builtin::items()).unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = Catalog::new([
            VocabularyItem::new("dog", "狗", ["ㄍㄡˇ"], "dog.png", Category::Animal),
            VocabularyItem::new("dog", "犬", ["ㄑㄩㄢˇ"], "dog2.png", Category::Animal),
        ])
        .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::DuplicateVocabularyId(ref id) if id == "dog"));
        assert_eq!(err.context.and_then(|c| c.index), Some(1));
    }

    #[test]
    fn invalid_item_rejected_with_position() {
        let empty: [&str; 0] = [];
        let err = Catalog::new([
            VocabularyItem::new("dog", "狗", ["ㄍㄡˇ"], "dog.png", Category::Animal),
            VocabularyItem::new("ghost", "鬼", empty, "ghost.png", Category::Nature),
        ])
        .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::EmptySpelling(_)));
        assert_eq!(err.context.and_then(|c| c.index), Some(1));
    }

    #[test]
    fn by_category_filters() {
        let catalog = small();
        let animals = catalog.by_category(Category::Animal);
        assert_eq!(animals.len(), 2);
        assert!(animals.iter().all(|i| i.category == Category::Animal));
        assert!(catalog.by_category(Category::Food).is_empty());
    }

    #[test]
    fn by_category_name_unknown_is_empty() {
        let catalog = small();
        assert_eq!(catalog.by_category_name("nature").len(), 1);
        assert!(catalog.by_category_name("vehicle").is_empty());
    }

    #[test]
    fn by_id_lookup() {
        let catalog = small();
        assert_eq!(catalog.by_id("sun").map(|i| i.display.as_str()), Some("太陽"));
        assert!(catalog.by_id("moon").is_none());
    }

    #[test]
    fn categories_present() {
        let catalog = small();
        let categories: Vec<_> = catalog.categories().into_iter().collect();
        assert_eq!(categories, vec![Category::Animal, Category::Nature]);
    }

    #[test]
    fn sample_respects_exclusion() {
        let catalog = small();
        let exclude = LtSet::new().insert(VocabId::new("dog"));
        let sample = catalog.random_sample(10, &exclude, &mut SeededRandom::new(3));

        assert_eq!(sample.len(), 2);
        assert!(sample.iter().all(|i| i.id.as_str() != "dog"));
    }

    #[test]
    fn sample_exhausted_is_empty() {
        let catalog = small();
        let exclude: LtSet<_> = catalog.iter().map(|i| i.id.clone()).collect();
        let sample = catalog.random_sample(1, &exclude, &mut SeededRandom::new(3));
        assert!(sample.is_empty());
    }

    #[test]
    fn sample_scripted_draw() {
        // First draw picks position 2 of [dog, cat, sun].
        let catalog = small();
        let sample = catalog.random_sample(1, &LtSet::new(), &mut ScriptedRandom::new(vec![2]));
        assert_eq!(sample[0].id.as_str(), "sun");
    }

    #[test]
    fn sample_draws_once_per_pick() {
        let catalog = small();
        let mut rng = ScriptedRandom::zeros();

        catalog.random_sample(2, &LtSet::new(), &mut rng);
        assert_eq!(rng.draws(), 2);

        // Asking for more than exist stops at the eligible count.
        catalog.random_sample(5, &LtSet::new(), &mut rng);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn sample_zero_requested() {
        let catalog = small();
        assert!(
            catalog
                .random_sample(0, &LtSet::new(), &mut SeededRandom::new(0))
                .is_empty()
        );
    }
}

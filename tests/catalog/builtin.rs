//! Tests against the shipped vocabulary

use std::collections::HashSet;

use zhuyin_catalog::{Catalog, Category, PHONETIC_ALPHABET};

#[test]
fn fifty_items_in_five_categories() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 50);
    assert_eq!(catalog.categories().len(), 5);

    let counts: Vec<_> = Category::ALL
        .iter()
        .map(|&c| catalog.by_category(c).len())
        .collect();
    assert_eq!(counts, vec![15, 12, 10, 6, 7]);
}

#[test]
fn by_category_only_returns_that_category() {
    let catalog = Catalog::builtin();
    for category in Category::ALL {
        assert!(
            catalog
                .by_category(category)
                .iter()
                .all(|item| item.category == category)
        );
    }
}

#[test]
fn category_names() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.by_category_name("family").len(), 6);
    assert_eq!(catalog.by_category_name(" Nature ").len(), 7);
    assert!(catalog.by_category_name("vehicles").is_empty());
}

#[test]
fn lookup_by_id() {
    let catalog = Catalog::builtin();
    let rabbit = catalog.by_id("rabbit").unwrap();
    assert_eq!(rabbit.display, "兔子");
    assert_eq!(rabbit.spelling, vec!["ㄊㄨˋ", "ㄗˇ"]);
    assert_eq!(rabbit.spelled(), "ㄊㄨˋㄗˇ");
    assert!(catalog.by_id("unicorn").is_none());
}

#[test]
fn every_item_is_valid_and_unique() {
    let catalog = Catalog::builtin();
    let mut ids = HashSet::new();
    for item in catalog.iter() {
        assert!(item.validate().is_ok(), "{}", item.id);
        assert!(ids.insert(item.id.clone()), "duplicate {}", item.id);
        assert_eq!(item.image, format!("{}.png", item.id));
    }
}

#[test]
fn alphabet_has_thirty_seven_distinct_symbols() {
    let unique: HashSet<_> = PHONETIC_ALPHABET.iter().collect();
    assert_eq!(unique.len(), 37);
    assert_eq!(PHONETIC_ALPHABET[0], "ㄅ");
}

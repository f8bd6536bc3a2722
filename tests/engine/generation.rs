//! Level generation against the built-in catalog

use zhuyin_catalog::Catalog;
use zhuyin_engine::{GameConfig, LevelGenerator, LevelShape, Prompt, QuestionType};
use zhuyin_foundation::{LtSet, SeededRandom};

#[test]
fn fresh_level_blocks_in_order() {
    let catalog = Catalog::builtin();
    let config = GameConfig::default();
    let level = LevelGenerator::new(&catalog, &config).generate(&LtSet::new(), &mut SeededRandom::new(5));

    let counts = QuestionType::ALL.map(|kind| {
        level
            .questions
            .iter()
            .filter(|q| q.kind() == kind)
            .count()
    });
    assert_eq!(counts, [3, 2, 1]);
    assert_eq!(level.used_ids.len(), 6);
}

#[test]
fn custom_shape_and_distractors() {
    let catalog = Catalog::builtin();
    let config = GameConfig::default()
        .with_shape(LevelShape::new(2, 2, 0))
        .with_image_distractors(1)
        .with_spell_distractors(4);
    let level = LevelGenerator::new(&catalog, &config).generate(&LtSet::new(), &mut SeededRandom::new(9));

    assert_eq!(level.questions.len(), 4);
    for q in level.questions.iter() {
        match q.prompt() {
            Prompt::ImageMatch { options, .. } => assert_eq!(options.len(), 2),
            Prompt::SymbolSpell { options, answer } => assert_eq!(options.len(), answer.len() + 4),
            Prompt::SymbolSort { .. } => panic!("shape has no sort questions"),
        }
    }
}

#[test]
fn consecutive_levels_never_repeat_words() {
    let catalog = Catalog::builtin();
    let config = GameConfig::default();
    let generator = LevelGenerator::new(&catalog, &config);
    let mut rng = SeededRandom::new(1);

    let mut used = LtSet::new();
    for _ in 0..8 {
        let level = generator.generate(&used, &mut rng);
        assert_eq!(level.questions.len(), 6);
        for id in &level.used_ids {
            assert!(!used.contains(id), "{id} asked twice");
        }
        used = used.extend(level.used_ids);
    }
    assert_eq!(used.len(), 48);

    let tail = generator.generate(&used, &mut rng);
    assert_eq!(tail.questions.len(), 2);
    assert!(tail.questions.iter().all(|q| q.kind() == QuestionType::ImageMatch));
}

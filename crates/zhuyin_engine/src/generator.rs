//! Level generation.
//!
//! A level is a batch of questions built in fixed block order: all image
//! matches, then all spellings, then all sorts. Each question asks about a
//! different word, and no word already seen this session is reused.

use std::sync::Arc;

use zhuyin_catalog::{Catalog, PHONETIC_ALPHABET, VocabularyItem};
use zhuyin_foundation::{LtSet, LtVec, RandomSource, VocabId, shuffle};

use crate::config::GameConfig;
use crate::question::{Prompt, Question, QuestionType};

/// The output of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    /// Questions in presentation order.
    pub questions: LtVec<Question>,
    /// Ids of the words the questions ask about, in the same order.
    pub used_ids: Vec<VocabId>,
}

/// Builds question batches from a catalog.
#[derive(Clone, Copy, Debug)]
pub struct LevelGenerator<'a> {
    catalog: &'a Catalog,
    config: &'a GameConfig,
}

impl<'a> LevelGenerator<'a> {
    /// Creates a generator over `catalog`.
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &'a GameConfig) -> Self {
        Self { catalog, config }
    }

    /// Generates one level, never asking about a word in `exclude`.
    ///
    /// If the catalog runs out of fresh words, the current block stops early
    /// and the level comes out shorter than the configured shape.
    pub fn generate(&self, exclude: &LtSet<VocabId>, rng: &mut dyn RandomSource) -> GeneratedLevel {
        let mut taken = exclude.clone();
        let mut questions = Vec::with_capacity(self.config.shape.total());
        let mut used_ids = Vec::with_capacity(self.config.shape.total());

        for kind in QuestionType::ALL {
            for _ in 0..self.config.shape.count(kind) {
                let Some(item) = self.catalog.random_sample(1, &taken, rng).pop() else {
                    tracing::warn!(
                        kind = %kind,
                        generated = questions.len(),
                        "vocabulary exhausted, level will be short"
                    );
                    break;
                };
                taken = taken.insert(item.id.clone());
                used_ids.push(item.id.clone());
                questions.push(self.question(kind, item, rng));
            }
        }

        tracing::debug!(
            questions = questions.len(),
            excluded = exclude.len(),
            "generated level"
        );

        GeneratedLevel {
            questions: questions.into(),
            used_ids,
        }
    }

    /// Builds a single question of `kind` about `item`.
    pub fn question(
        &self,
        kind: QuestionType,
        item: Arc<VocabularyItem>,
        rng: &mut dyn RandomSource,
    ) -> Question {
        let prompt = match kind {
            QuestionType::ImageMatch => self.image_match(&item, rng),
            QuestionType::SymbolSpell => self.symbol_spell(&item, rng),
            QuestionType::SymbolSort => {
                let mut options = item.spelling.clone();
                shuffle(&mut options, rng);
                Prompt::SymbolSort {
                    options,
                    answer: item.spelling.clone(),
                }
            }
        };
        Question::new(item, prompt)
    }

    fn image_match(&self, item: &VocabularyItem, rng: &mut dyn RandomSource) -> Prompt {
        let answer = item.spelled();
        let wanted = self.config.image_distractors + 1;
        let mut options = vec![answer.clone()];

        // Distractors may be words used earlier; only the word itself is
        // excluded. Homophones are skipped so exactly one option is right.
        let mut seen = LtSet::new().insert(item.id.clone());
        while options.len() < wanted {
            let batch = self.catalog.random_sample(wanted - options.len(), &seen, rng);
            if batch.is_empty() {
                break;
            }
            for other in batch {
                seen = seen.insert(other.id.clone());
                let spelled = other.spelled();
                if !options.contains(&spelled) {
                    options.push(spelled);
                }
            }
        }

        shuffle(&mut options, rng);
        Prompt::ImageMatch { options, answer }
    }

    fn symbol_spell(&self, item: &VocabularyItem, rng: &mut dyn RandomSource) -> Prompt {
        let mut pool: Vec<&str> = PHONETIC_ALPHABET
            .iter()
            .copied()
            .filter(|symbol| !item.spelling.iter().any(|s| s.as_str() == *symbol))
            .collect();
        shuffle(&mut pool, rng);
        pool.truncate(self.config.spell_distractors);

        let mut options = item.spelling.clone();
        options.extend(pool.into_iter().map(String::from));
        shuffle(&mut options, rng);

        Prompt::SymbolSpell {
            options,
            answer: item.spelling.clone(),
        }
    }
}

//! Turning image references into something a terminal can show.

use std::collections::HashMap;
use std::path::Path;

/// Shown whenever an image cannot be resolved.
pub const FALLBACK_GLYPH: &str = "🖼️";

/// Resolves a vocabulary item's image reference to a displayable glyph.
///
/// Resolution never fails; unknown images map to [`FALLBACK_GLYPH`].
pub trait ImageResolver {
    /// Returns the glyph for `image`.
    fn resolve(&self, image: &str) -> String;
}

/// Always answers with the fallback glyph.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderImages;

impl ImageResolver for PlaceholderImages {
    fn resolve(&self, _image: &str) -> String {
        FALLBACK_GLYPH.to_string()
    }
}

/// Maps image file stems to emoji.
#[derive(Clone, Debug)]
pub struct EmojiImages {
    glyphs: HashMap<String, String>,
}

impl EmojiImages {
    /// Creates a resolver with no mappings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    /// Builder method to map the image stem `stem` to `glyph`.
    #[must_use]
    pub fn with_glyph(mut self, stem: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(stem.into(), glyph.into());
        self
    }

    /// Returns the number of known images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if no images are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for EmojiImages {
    /// A resolver covering every built-in vocabulary image.
    fn default() -> Self {
        BUILTIN_GLYPHS
            .iter()
            .fold(Self::empty(), |images, (stem, glyph)| images.with_glyph(*stem, *glyph))
    }
}

impl ImageResolver for EmojiImages {
    fn resolve(&self, image: &str) -> String {
        let stem = Path::new(image)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(image);

        match self.glyphs.get(stem) {
            Some(glyph) => glyph.clone(),
            None => {
                tracing::debug!(image, "no glyph for image, using fallback");
                FALLBACK_GLYPH.to_string()
            }
        }
    }
}

const BUILTIN_GLYPHS: [(&str, &str); 50] = [
    // Animals
    ("dog", "🐕"),
    ("cat", "🐱"),
    ("bird", "🐦"),
    ("fish", "🐟"),
    ("rabbit", "🐰"),
    ("elephant", "🐘"),
    ("tiger", "🐯"),
    ("bear", "🐻"),
    ("monkey", "🐵"),
    ("pig", "🐷"),
    ("cow", "🐮"),
    ("horse", "🐴"),
    ("sheep", "🐑"),
    ("duck", "🦆"),
    ("chicken", "🐔"),
    // Food
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("watermelon", "🍉"),
    ("rice", "🍚"),
    ("bread", "🍞"),
    ("cake", "🎂"),
    ("icecream", "🍦"),
    ("milk", "🥛"),
    ("egg", "🥚"),
    ("orange", "🍊"),
    ("grape", "🍇"),
    ("strawberry", "🍓"),
    // Daily
    ("book", "📖"),
    ("pencil", "✏️"),
    ("bag", "🎒"),
    ("chair", "🪑"),
    ("table", "🪑"),
    ("ball", "⚽"),
    ("umbrella", "☂️"),
    ("clock", "🕐"),
    ("phone", "📞"),
    ("cup", "🥤"),
    // Family
    ("dad", "👨"),
    ("mom", "👩"),
    ("grandpa", "👴"),
    ("grandma", "👵"),
    ("brother", "👦"),
    ("sister", "👧"),
    // Nature
    ("sun", "☀️"),
    ("moon", "🌙"),
    ("star", "⭐"),
    ("flower", "🌸"),
    ("tree", "🌳"),
    ("cloud", "☁️"),
    ("rain", "🌧️"),
];

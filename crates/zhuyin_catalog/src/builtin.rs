//! The vocabulary shipped with the game.

use crate::category::Category;
use crate::item::VocabularyItem;

type Entry = (&'static str, &'static str, &'static [&'static str], Category);

/// Id, display text, spelling, category. The image reference is `<id>.png`.
const ENTRIES: &[Entry] = &[
    // Animals
    ("dog", "狗", &["ㄍㄡˇ"], Category::Animal),
    ("cat", "貓", &["ㄇㄠ"], Category::Animal),
    ("bird", "鳥", &["ㄋㄧㄠˇ"], Category::Animal),
    ("fish", "魚", &["ㄩˊ"], Category::Animal),
    ("rabbit", "兔子", &["ㄊㄨˋ", "ㄗˇ"], Category::Animal),
    ("elephant", "大象", &["ㄉㄚˋ", "ㄒㄧㄤˋ"], Category::Animal),
    ("tiger", "老虎", &["ㄌㄠˇ", "ㄏㄨˇ"], Category::Animal),
    ("bear", "熊", &["ㄒㄩㄥˊ"], Category::Animal),
    ("monkey", "猴子", &["ㄏㄡˊ", "ㄗˇ"], Category::Animal),
    ("pig", "豬", &["ㄓㄨ"], Category::Animal),
    ("cow", "牛", &["ㄋㄧㄡˊ"], Category::Animal),
    ("horse", "馬", &["ㄇㄚˇ"], Category::Animal),
    ("sheep", "羊", &["ㄧㄤˊ"], Category::Animal),
    ("duck", "鴨子", &["ㄧㄚ", "ㄗˇ"], Category::Animal),
    ("chicken", "雞", &["ㄐㄧ"], Category::Animal),
    // Food
    ("apple", "蘋果", &["ㄆㄧㄥˊ", "ㄍㄨㄛˇ"], Category::Food),
    ("banana", "香蕉", &["ㄒㄧㄤ", "ㄐㄧㄠ"], Category::Food),
    ("watermelon", "西瓜", &["ㄒㄧ", "ㄍㄨㄚ"], Category::Food),
    ("rice", "米飯", &["ㄇㄧˇ", "ㄈㄢˋ"], Category::Food),
    ("bread", "麵包", &["ㄇㄧㄢˋ", "ㄅㄠ"], Category::Food),
    ("cake", "蛋糕", &["ㄉㄢˋ", "ㄍㄠ"], Category::Food),
    ("icecream", "冰淇淋", &["ㄅㄧㄥ", "ㄑㄧˊ", "ㄌㄧㄣˊ"], Category::Food),
    ("milk", "牛奶", &["ㄋㄧㄡˊ", "ㄋㄞˇ"], Category::Food),
    ("egg", "雞蛋", &["ㄐㄧ", "ㄉㄢˋ"], Category::Food),
    ("orange", "橘子", &["ㄐㄩˊ", "ㄗˇ"], Category::Food),
    ("grape", "葡萄", &["ㄆㄨˊ", "ㄊㄠˊ"], Category::Food),
    ("strawberry", "草莓", &["ㄘㄠˇ", "ㄇㄟˊ"], Category::Food),
    // Everyday objects
    ("book", "書", &["ㄕㄨ"], Category::Daily),
    ("pencil", "鉛筆", &["ㄑㄧㄢ", "ㄅㄧˇ"], Category::Daily),
    ("bag", "書包", &["ㄕㄨ", "ㄅㄠ"], Category::Daily),
    ("chair", "椅子", &["ㄧˇ", "ㄗˇ"], Category::Daily),
    ("table", "桌子", &["ㄓㄨㄛ", "ㄗˇ"], Category::Daily),
    ("ball", "球", &["ㄑㄧㄡˊ"], Category::Daily),
    ("umbrella", "雨傘", &["ㄩˇ", "ㄙㄢˇ"], Category::Daily),
    ("clock", "時鐘", &["ㄕˊ", "ㄓㄨㄥ"], Category::Daily),
    ("phone", "電話", &["ㄉㄧㄢˋ", "ㄏㄨㄚˋ"], Category::Daily),
    ("cup", "杯子", &["ㄅㄟ", "ㄗˇ"], Category::Daily),
    // Family
    ("dad", "爸爸", &["ㄅㄚˋ", "ㄅㄚ˙"], Category::Family),
    ("mom", "媽媽", &["ㄇㄚ", "ㄇㄚ˙"], Category::Family),
    ("grandpa", "爺爺", &["ㄧㄝˊ", "ㄧㄝ˙"], Category::Family),
    ("grandma", "奶奶", &["ㄋㄞˇ", "ㄋㄞ˙"], Category::Family),
    ("brother", "哥哥", &["ㄍㄜ", "ㄍㄜ˙"], Category::Family),
    ("sister", "姐姐", &["ㄐㄧㄝˇ", "ㄐㄧㄝ˙"], Category::Family),
    // Nature
    ("sun", "太陽", &["ㄊㄞˋ", "ㄧㄤˊ"], Category::Nature),
    ("moon", "月亮", &["ㄩㄝˋ", "ㄌㄧㄤˋ"], Category::Nature),
    ("star", "星星", &["ㄒㄧㄥ", "ㄒㄧㄥ˙"], Category::Nature),
    ("flower", "花", &["ㄏㄨㄚ"], Category::Nature),
    ("tree", "樹", &["ㄕㄨˋ"], Category::Nature),
    ("cloud", "雲", &["ㄩㄣˊ"], Category::Nature),
    ("rain", "雨", &["ㄩˇ"], Category::Nature),
];

/// Returns the built-in vocabulary in declaration order.
#[must_use]
pub fn items() -> Vec<VocabularyItem> {
    ENTRIES
        .iter()
        .map(|&(id, display, spelling, category)| {
            VocabularyItem::new(
                id,
                display,
                spelling.iter().copied(),
                format!("{id}.png"),
                category,
            )
        })
        .collect()
}

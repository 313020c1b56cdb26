//! Built-in word lists used when no external data is supplied.

/// Fallback 5-letter words.
pub const DEFAULT_WORDS: &[&str] = &[
    "APPLE", "BEACH", "CRANE", "DANCE", "EAGLE", "FLAME", "GRAPE", "HOUSE", "IVORY", "JOKER",
    "KNIFE", "LEMON", "MANGO", "NOBLE", "OCEAN", "PIANO", "QUEEN", "RIVER", "STONE", "TIGER",
    "UNCLE", "VIVID", "WHALE", "YACHT", "ZEBRA", "BREAD", "CHAIR", "DREAM", "FROST", "GHOST",
    "HEART", "LIGHT", "MONEY", "NIGHT", "PLANT", "SHEEP", "TRAIN", "WATER", "CLOUD", "BRUSH",
    "SPOON", "TOWER", "PUPPY", "SKILL", "LLAMA", "CANDY", "STORM", "PEARL", "SWORD", "FEAST",
    "ACORN", "AMBER", "ANGEL", "ARROW", "BACON", "BADGE", "BENCH", "BLADE", "BLOOM", "BRICK",
    "CABIN", "CAMEL", "CHALK", "CHESS", "CIDER", "CORAL", "CRISP", "DAISY", "DELTA", "DRIFT",
    "EMBER", "FAIRY", "FERRY", "FLUTE", "GLOVE", "GRAIN", "HONEY", "HORSE", "IGLOO", "JELLY",
    "KOALA", "MAPLE", "MEDAL", "MOUSE", "NORTH", "OLIVE", "ONION", "OTTER", "PANDA", "PAINT",
    "QUILT", "RADIO", "ROBIN", "SALAD", "SCARF", "SNAKE", "TULIP", "UNITY", "VAPOR", "WAGON",
    "WHEAT", "YOUTH", "ZESTY",
];

/// Fallback riddles as `(riddle, answer)` pairs.
pub const DEFAULT_RIDDLES: &[(&str, &str)] = &[
    ("I have keys but no locks. I have space but no room. You can enter, but you can't go outside.", "keyboard"),
    ("I have hands but cannot clap, and a face that never smiles.", "clock"),
    ("The more of me you take, the more you leave behind.", "footsteps"),
    ("I have a neck but no head, and I wear a cap.", "bottle"),
    ("I go up and down but never move.", "stairs"),
    ("I am full of holes but still hold water.", "sponge"),
    ("I shine at night without a flame and follow you home without feet.", "the moon"),
    ("I have cities but no houses, forests but no trees, and water but no fish.", "world map"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_default_words_are_five_uppercase_letters() {
        for word in DEFAULT_WORDS {
            assert_eq!(word.len(), 5, "{word}");
            assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{word}");
        }
    }

    #[test]
    fn test_default_words_unique() {
        let mut words = DEFAULT_WORDS.to_vec();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn test_default_words_cover_full_game() {
        let config = GameConfig::default();
        assert_eq!(config.normal.word_length, 5);
        assert_eq!(config.timed.word_length, 5);

        let per_team = config.normal.rounds as usize
            + config.timed.words_per_turn * config.timed.rounds as usize;
        assert!(
            DEFAULT_WORDS.len() >= config.max_teams * per_team,
            "{} words cannot serve {} teams",
            DEFAULT_WORDS.len(),
            config.max_teams
        );
    }

    #[test]
    fn test_default_riddle_answers_in_range() {
        for (_, answer) in DEFAULT_RIDDLES {
            let letters = answer.chars().filter(|c| *c != ' ').count();
            assert!((5..=9).contains(&letters), "{answer}");
        }
    }
}

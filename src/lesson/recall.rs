use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::chunk::Blank;

pub const BLANK_MARKER: &str = "____";

/// Punctuation stripped from a word before measuring its length.
const PUNCTUATION: [char; 8] = ['.', ',', ';', ':', '!', '?', '(', ')'];

const MIN_BLANKS: usize = 1;
const MAX_BLANKS: usize = 5;
const BLANK_RATIO: f64 = 0.2;

/// A chunk's recall variant: the marked-up text plus one descriptor per
/// hidden word.
#[derive(Debug, Clone, PartialEq)]
pub struct RecallText {
    pub text: String,
    pub blanks: Vec<Blank>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecallResult {
    pub correct_count: usize,
    pub accuracy: u32,
}

/// Replaces a random subset of eligible words in `text` with the blank
/// marker. Word count is preserved: tokens are split and rejoined on single
/// spaces, with punctuation kept attached to its word.
///
/// A text with fewer than 2 eligible words comes back unchanged with no
/// blanks; callers must treat zero-blank chunks as valid.
pub fn generate_recall<R: Rng>(text: &str, rng: &mut R) -> RecallText {
    let words: Vec<&str> = text.split(' ').collect();

    let candidates: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| is_eligible(word))
        .map(|(index, _)| index)
        .collect();

    if candidates.len() < 2 {
        return RecallText {
            text: text.to_string(),
            blanks: Vec::new(),
        };
    }

    let blank_count =
        ((candidates.len() as f64 * BLANK_RATIO) as usize).clamp(MIN_BLANKS, MAX_BLANKS);

    // choose_multiple draws without replacement, so positions never repeat
    let mut selected: Vec<usize> = candidates
        .choose_multiple(rng, blank_count)
        .copied()
        .collect();
    selected.sort_unstable();

    let mut blanks = Vec::with_capacity(selected.len());
    let mut offset = 0;
    let recall_words: Vec<&str> = words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let length = word.chars().count();
            let start = offset;
            offset += length + 1;

            if selected.binary_search(&index).is_ok() {
                blanks.push(Blank {
                    word: (*word).to_string(),
                    start_index: start,
                    end_index: start + length,
                });
                BLANK_MARKER
            } else {
                *word
            }
        })
        .collect();

    RecallText {
        text: recall_words.join(" "),
        blanks,
    }
}

/// Word indices of the blank marker in a recall text. This is how the recall
/// phase maps input fields back to word positions.
pub fn blanked_word_indices(recall_text: &str) -> Vec<usize> {
    recall_text
        .split(' ')
        .enumerate()
        .filter(|(_, word)| *word == BLANK_MARKER)
        .map(|(index, _)| index)
        .collect()
}

/// Scores one recall attempt. `blanked_word_indices[i]` is the word position
/// of blank `i`; `answers` maps blank index to the submitted string. Matching
/// is trimmed and case-folded; a missing answer counts as incorrect.
///
/// An attempt with zero blanks is trivially perfect.
pub fn check_recall(
    original_words: &[String],
    blanked_word_indices: &[usize],
    answers: &HashMap<usize, String>,
) -> RecallResult {
    if blanked_word_indices.is_empty() {
        return RecallResult {
            correct_count: 0,
            accuracy: 100,
        };
    }

    let correct_count = blanked_word_indices
        .iter()
        .enumerate()
        .filter(|(blank_index, word_index)| {
            let expected = match original_words.get(**word_index) {
                Some(word) => word,
                None => return false,
            };

            answers
                .get(blank_index)
                .map(|answer| answer.trim().to_lowercase() == expected.trim().to_lowercase())
                .unwrap_or(false)
        })
        .count();

    let accuracy =
        ((correct_count as f64 / blanked_word_indices.len() as f64) * 100.0).round() as u32;

    RecallResult {
        correct_count,
        accuracy,
    }
}

fn is_eligible(word: &str) -> bool {
    let stripped_length = word.chars().filter(|c| !PUNCTUATION.contains(c)).count();
    stripped_length > 3 && word.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn word_count(text: &str) -> usize {
        text.split(' ').count()
    }

    fn marker_count(text: &str) -> usize {
        text.split(' ').filter(|w| *w == BLANK_MARKER).count()
    }

    #[test]
    fn short_words_are_not_blanked() {
        let recall = generate_recall("the cat sat", &mut rng());
        assert_eq!(recall.text, "the cat sat");
        assert!(recall.blanks.is_empty());
    }

    #[test]
    fn single_eligible_word_falls_back_to_original() {
        let recall = generate_recall("one elephant ran by", &mut rng());
        assert_eq!(recall.text, "one elephant ran by");
        assert!(recall.blanks.is_empty());
    }

    #[test]
    fn punctuation_does_not_count_toward_word_length() {
        // "(the)" strips to 3 characters
        assert!(!is_eligible("(the)"));
        // "word," strips to 4
        assert!(is_eligible("word,"));
        assert!(is_eligible("1234"));
    }

    #[test]
    fn words_without_alphanumerics_are_ineligible() {
        assert!(!is_eligible("----"));
        assert!(!is_eligible("\u{2014}\u{2014}\u{2014}\u{2014}"));
    }

    #[test]
    fn twenty_eligible_words_get_four_blanks() {
        let text = (0..20)
            .map(|i| format!("word{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");

        let recall = generate_recall(&text, &mut rng());
        assert_eq!(recall.blanks.len(), 4);
        assert_eq!(marker_count(&recall.text), 4);
    }

    #[test]
    fn blank_count_is_clamped_to_bounds() {
        // 2 eligible words: floor(0.4) = 0, raised to 1
        let recall = generate_recall("alpha beta", &mut rng());
        assert_eq!(recall.blanks.len(), 1);

        // 30 eligible words: floor(6.0) = 6, capped at 5
        let text = (0..30)
            .map(|i| format!("token{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let recall = generate_recall(&text, &mut rng());
        assert_eq!(recall.blanks.len(), 5);
    }

    #[test]
    fn recall_preserves_word_count() {
        let text = "Segmentation breaks paragraphs into sentences, then packs them greedily.";
        let recall = generate_recall(text, &mut rng());
        assert_eq!(word_count(&recall.text), word_count(text));
    }

    #[test]
    fn non_selected_words_survive_verbatim() {
        let text = "Greedy packing keeps punctuation, (parentheses) and casing intact.";
        let recall = generate_recall(text, &mut rng());

        for (original, shown) in text.split(' ').zip(recall.text.split(' ')) {
            if shown != BLANK_MARKER {
                assert_eq!(shown, original);
            }
        }
    }

    #[test]
    fn blank_spans_point_at_their_words() {
        let text = "Character offsets locate every hidden word inside the chunk text.";
        let recall = generate_recall(text, &mut rng());
        assert!(!recall.blanks.is_empty());

        let chars: Vec<char> = text.chars().collect();
        for blank in &recall.blanks {
            let span: String = chars[blank.start_index..blank.end_index].iter().collect();
            assert_eq!(span, blank.word);
        }
    }

    #[test]
    fn blank_descriptors_match_marker_positions() {
        let text = "Descriptors and inline markers must always agree about positions.";
        let recall = generate_recall(text, &mut rng());

        let indices = blanked_word_indices(&recall.text);
        assert_eq!(indices.len(), recall.blanks.len());

        let words: Vec<&str> = text.split(' ').collect();
        for (blank, index) in recall.blanks.iter().zip(&indices) {
            assert_eq!(blank.word, words[*index]);
        }
    }

    #[test]
    fn same_seed_selects_same_blanks() {
        let text = "Deterministic seeds make blank selection reproducible in tests.";
        let first = generate_recall(text, &mut StdRng::seed_from_u64(7));
        let second = generate_recall(text, &mut StdRng::seed_from_u64(7));
        assert_eq!(first.text, second.text);
        assert_eq!(first.blanks, second.blanks);
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn checker_is_case_and_whitespace_insensitive() {
        let originals = owned(&["word", "word2", "word3"]);
        let answers = HashMap::from([
            (0, "Word".to_string()),
            (1, "wrong".to_string()),
            (2, "word3 ".to_string()),
        ]);

        let result = check_recall(&originals, &[0, 1, 2], &answers);
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.accuracy, 67);
    }

    #[test]
    fn all_correct_answers_score_100() {
        let originals = owned(&["alpha", "beta", "gamma"]);
        let answers = HashMap::from([
            (0, "ALPHA".to_string()),
            (1, " beta".to_string()),
            (2, "Gamma".to_string()),
        ]);

        let result = check_recall(&originals, &[0, 1, 2], &answers);
        assert_eq!(result.correct_count, 3);
        assert_eq!(result.accuracy, 100);
    }

    #[test]
    fn zero_blanks_score_100() {
        let result = check_recall(&owned(&["anything"]), &[], &HashMap::new());
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.accuracy, 100);
    }

    #[test]
    fn missing_answers_count_as_incorrect() {
        let originals = owned(&["alpha", "beta"]);
        let answers = HashMap::from([(0, "alpha".to_string())]);

        let result = check_recall(&originals, &[0, 1], &answers);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.accuracy, 50);
    }

    #[test]
    fn blank_indices_found_by_marker_scan() {
        let indices = blanked_word_indices("The ____ jumped over the ____ fence.");
        assert_eq!(indices, vec![1, 5]);
    }
}

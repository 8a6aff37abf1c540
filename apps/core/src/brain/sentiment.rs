//! Lexicon sentiment scoring.
//!
//! Sums word valences (roughly -4.0 to +4.0) with booster and negation
//! handling, then squashes the sum into a compound score in [-1.0, 1.0].

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::fold_text;

/// Squash constant: compound = sum / sqrt(sum^2 + ALPHA)
const ALPHA: f32 = 15.0;

/// Magnitude added to a word preceded by a booster
const BOOST: f32 = 0.293;

/// Multiplier applied to a word with a negator in the preceding window
const NEGATION_SCALAR: f32 = -0.74;

/// How many preceding tokens are checked for a negator
const NEGATION_WINDOW: usize = 3;

// NOTE: expect() is acceptable here: the pattern is a constant
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z']+").expect("Invalid regex: token pattern"));

const VALENCES: &[(&str, f32)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("glad", 2.0),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("excited", 2.2),
    ("exciting", 2.2),
    ("grateful", 2.0),
    ("thankful", 2.0),
    ("love", 3.2),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("excellent", 2.7),
    ("nice", 1.8),
    ("fine", 0.8),
    ("okay", 0.9),
    ("ok", 0.9),
    ("calm", 1.3),
    ("relaxed", 2.2),
    ("hopeful", 2.3),
    ("proud", 2.1),
    ("confident", 2.2),
    ("energized", 2.1),
    ("motivated", 1.8),
    ("better", 1.9),
    ("best", 3.2),
    ("fun", 2.3),
    ("enjoy", 2.2),
    ("peaceful", 2.2),
    ("win", 2.8),
    ("success", 2.7),
    ("productive", 1.6),
    // Negative
    ("bad", -2.5),
    ("sad", -2.1),
    ("unhappy", -1.8),
    ("depressed", -2.3),
    ("lonely", -1.8),
    ("miserable", -2.2),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("hate", -2.7),
    ("angry", -2.3),
    ("upset", -1.6),
    ("anxious", -1.0),
    ("worried", -1.2),
    ("worry", -1.9),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("overwhelmed", -1.5),
    ("panic", -2.3),
    ("afraid", -2.2),
    ("scared", -1.9),
    ("tired", -1.9),
    ("exhausted", -1.5),
    ("drained", -1.5),
    ("hopeless", -2.2),
    ("worthless", -2.6),
    ("hurt", -2.4),
    ("cry", -2.1),
    ("crying", -2.1),
    ("frustrated", -2.0),
    ("annoyed", -1.6),
    ("bored", -1.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("lost", -1.3),
    ("pain", -2.3),
    ("sick", -2.3),
    ("lazy", -1.4),
    ("unmotivated", -1.5),
];

const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "so",
    "extremely",
    "incredibly",
    "super",
    "totally",
    "absolutely",
    "completely",
    "deeply",
    "truly",
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "neither", "nor", "without", "hardly",
    "barely", "cannot", "cant", "dont", "isnt", "wasnt", "aint",
];

static LEXICON: LazyLock<HashMap<&'static str, f32>> =
    LazyLock::new(|| VALENCES.iter().copied().collect());

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

/// Lexicon-based sentiment analyzer
#[derive(Debug, Default, Clone, Copy)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(text: &str) -> Vec<String> {
        let folded = fold_text(text);
        TOKEN_RE
            .find_iter(&folded)
            .map(|m| m.as_str().trim_matches('\'').to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Raw valence sum before normalization
    fn valence_sum(tokens: &[String]) -> f32 {
        let mut sum = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = LEXICON.get(token.as_str()) else {
                continue;
            };

            let mut valence = base;

            if i > 0 && BOOSTERS.contains(&tokens[i - 1].as_str()) {
                valence += BOOST * valence.signum();
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                valence *= NEGATION_SCALAR;
            }

            sum += valence;
        }

        sum
    }

    /// Compound sentiment score in [-1.0, 1.0]
    pub fn compound(&self, text: &str) -> f32 {
        let tokens = Self::tokenize(text);
        let sum = Self::valence_sum(&tokens);
        if sum == 0.0 {
            return 0.0;
        }
        (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text() {
        let sa = SentimentAnalyzer::new();
        assert_eq!(sa.compound(""), 0.0);
        assert_eq!(sa.compound("The meeting is at noon"), 0.0);
    }

    #[test]
    fn test_positive_text() {
        let sa = SentimentAnalyzer::new();
        assert!(sa.compound("I am so happy and grateful today") >= 0.5);
    }

    #[test]
    fn test_negative_text() {
        let sa = SentimentAnalyzer::new();
        assert!(sa.compound("I feel terrible and hopeless") <= -0.5);
    }

    #[test]
    fn test_negation_flips() {
        let sa = SentimentAnalyzer::new();
        let plain = sa.compound("I am happy");
        let negated = sa.compound("I am not happy");
        assert!(plain > 0.0);
        assert!(negated < 0.0);

        assert!(sa.compound("I don't feel good") < 0.0);
        assert!(sa.compound("I don\u{2019}t feel good") < 0.0);
    }

    #[test]
    fn test_booster_increases_magnitude() {
        let sa = SentimentAnalyzer::new();
        assert!(sa.compound("I am very sad") < sa.compound("I am sad"));
    }

    #[test]
    fn test_compound_is_bounded() {
        let sa = SentimentAnalyzer::new();
        let text = "great ".repeat(200);
        let c = sa.compound(&text);
        assert!(c <= 1.0 && c > 0.99);
    }
}

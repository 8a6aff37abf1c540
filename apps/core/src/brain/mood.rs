//! Mood Detection.
//!
//! Scores five moods from mood keywords, the sentiment compound score and a
//! recency penalty taken from mood memory. The highest score wins; ties go
//! to the mood listed first in [`Mood::ALL`].

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fold_text;
use super::sentiment::SentimentAnalyzer;
use crate::error::AppError;
use crate::memory::MoodMemory;

/// Score added when any keyword of a mood is present
const KEYWORD_WEIGHT: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Stressed,
    Tired,
    Sad,
    Happy,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Stressed,
        Mood::Tired,
        Mood::Sad,
        Mood::Happy,
        Mood::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
            Mood::Sad => "sad",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
        }
    }

    fn index(&self) -> usize {
        match self {
            Mood::Stressed => 0,
            Mood::Tired => 1,
            Mood::Sad => 2,
            Mood::Happy => 3,
            Mood::Neutral => 4,
        }
    }

    /// Keywords tested as substrings of the case-folded text
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Mood::Stressed => &["overwhelmed", "anxious", "stress", "pressure", "panic"],
            Mood::Tired => &["sleepy", "exhausted", "fatigue", "drained", "tired"],
            Mood::Sad => &["down", "blue", "depressed", "lonely", "sad"],
            Mood::Happy => &["great", "excited", "joy", "grateful", "happy"],
            Mood::Neutral => &[],
        }
    }

    /// Quick actions suggested for the mood
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            Mood::Stressed => &[
                "2-minute box breathing: inhale 4s, hold 4s, exhale 4s, hold 4s.",
                "Write down 3 worries, then one tiny action for each.",
                "Stretch your neck and shoulders for 60 seconds.",
            ],
            Mood::Tired => &[
                "Stand up, sip water, and do 10 slow squats.",
                "2-minute sunlight break at a window/balcony.",
                "Swap tasks: do a 5-minute easy win to regain momentum.",
            ],
            Mood::Sad => &[
                "Text a friend one nice thing.",
                "Play a comforting song and breathe for a minute.",
                "Step outside for 3 minutes and name 5 things you see.",
            ],
            Mood::Happy => &[
                "Bank the energy: tackle a 10-minute task you've delayed.",
                "Share gratitude: write 2 lines to someone you appreciate.",
                "Queue a playlist and do a focused 15-minute sprint.",
            ],
            Mood::Neutral => &[
                "Pick one 10-minute task and set a timer.",
                "Tidy your workspace for 3 minutes.",
                "Drink water and plan your next 30 minutes.",
            ],
        }
    }

    /// Up to `n` distinct suggestions for the mood, in random order
    pub fn suggest<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<&'static str> {
        let mut pool = self.suggestions().to_vec();
        pool.shuffle(rng);
        pool.truncate(n);
        pool
    }

    /// Comma-separated list of every mood label
    pub fn all_labels() -> String {
        Mood::ALL
            .iter()
            .map(Mood::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.label() == wanted)
            .ok_or_else(|| AppError::Validation(format!("Unknown mood `{}`", wanted)))
    }
}

/// Outcome of a mood detection
#[derive(Debug, Clone)]
pub struct MoodDetection {
    pub mood: Mood,
    /// Sentiment compound score in [-1.0, 1.0]
    pub compound: f32,
    /// Human-readable reasons, in the order they were applied
    pub reasons: Vec<String>,
    /// Final score per mood, indexed like [`Mood::ALL`]
    pub scores: [f32; 5],
    /// Whether any mood keyword appeared in the text
    pub keyword_hit: bool,
}

impl MoodDetection {
    pub fn score(&self, mood: Mood) -> f32 {
        self.scores[mood.index()]
    }

    /// "stressed=0.00, tired=0.60, ..."
    pub fn score_snapshot(&self) -> String {
        Mood::ALL
            .iter()
            .map(|m| format!("{}={:.2}", m, self.score(*m)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Markdown explanation of the detection
    pub fn explanation(&self) -> String {
        let reasons = self
            .reasons
            .iter()
            .map(|r| format!("- {}", r))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "**Why I chose this mood**\n{}\n\n**Score snapshot:** {}",
            reasons,
            self.score_snapshot()
        )
    }
}

/// Mood detector combining keywords, sentiment and recency
#[derive(Debug, Clone)]
pub struct MoodDetector {
    sentiment: SentimentAnalyzer,
    recency_window: Duration,
}

impl Default for MoodDetector {
    fn default() -> Self {
        Self::new(Duration::minutes(60))
    }
}

impl MoodDetector {
    pub fn new(recency_window: Duration) -> Self {
        Self {
            sentiment: SentimentAnalyzer::new(),
            recency_window,
        }
    }

    pub fn detect(&self, text: &str, memory: &MoodMemory, now: DateTime<Utc>) -> MoodDetection {
        let folded = fold_text(text);
        let mut scores = [0.0f32; 5];
        let mut reasons = Vec::new();
        let mut keyword_hit = false;

        // 1. Keywords
        for mood in Mood::ALL {
            let hits: Vec<&str> = mood
                .keywords()
                .iter()
                .copied()
                .filter(|kw| folded.contains(kw))
                .collect();
            if !hits.is_empty() {
                keyword_hit = true;
                scores[mood.index()] += KEYWORD_WEIGHT;
                reasons.push(format!("keywords for **{}**: {}", mood, hits.join(", ")));
            }
        }

        // 2. Sentiment
        let compound = self.sentiment.compound(&folded);
        let (mood, bonus, shade) = if compound >= 0.5 {
            (Mood::Happy, 0.5, "positive")
        } else if compound >= 0.05 {
            (Mood::Happy, 0.2, "slightly positive")
        } else if compound <= -0.5 {
            (Mood::Sad, 0.5, "negative")
        } else if compound <= -0.05 {
            (Mood::Stressed, 0.2, "slightly negative")
        } else {
            (Mood::Neutral, 0.2, "neutral")
        };
        scores[mood.index()] += bonus;
        reasons.push(format!(
            "{} sentiment (compound={:.2}) → **{}**",
            shade, compound, mood
        ));

        // 3. Recency
        for mood in Mood::ALL {
            let adj = memory.recency_penalty(mood, now, self.recency_window);
            scores[mood.index()] += adj;
            if adj < 0.0 {
                reasons.push(format!("recently seen **{}** → applying penalty", mood));
            }
        }

        let mut best = Mood::ALL[0];
        for mood in Mood::ALL {
            if scores[mood.index()] > scores[best.index()] {
                best = mood;
            }
        }

        MoodDetection {
            mood: best,
            compound,
            reasons,
            scores,
            keyword_hit,
        }
    }
}

//! Coach - per-turn dialog logic.
//!
//! Handles chat commands, then advice intent matching, then the mood
//! check-in, and finally the fallback reply. The only state kept across
//! turns is mood memory and the last mood detection (for `why`).

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::advice::AdviceDatabase;
use super::intent::{Intent, IntentMatcher};
use super::mood::{Mood, MoodDetection, MoodDetector};
use super::picker::ResponsePicker;
use super::quotes::QuoteBook;
use crate::config::CoachConfig;
use crate::error::AppError;
use crate::memory::MoodMemory;
use crate::models::ConversationTurn;

pub const WELCOME: &str = "**AI Life Coach Agent**\n\n\
Tell me how you're feeling (e.g., *tired, stressed, happy*) or what you need help with \
(*motivation, focus, wellness, productivity*), and I'll suggest quick, helpful actions.\n\n\
**Commands**\n\
• `why` → explain my mood detection\n\
• `correct: <mood>` → override (moods: stressed, tired, sad, happy, neutral)\n\
• `reset` → clear recent mood memory\n\
• `save` → save memory to disk\n\
• `quote` → a random quote\n\
• `help` → show this message\n\
• `quit` → leave the chat\n";

const WHY_HINT: &str = "Send a sentence describing how you feel (e.g., 'I'm overwhelmed and anxious'). \
I'll explain my reasoning next time.";

/// Chat commands understood by the coach
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Save,
    Reset,
    Correct(String),
    Why,
    Help,
    Quote,
}

impl Command {
    /// Parses a trimmed message. Matching is case-insensitive and ignores
    /// trailing `?`, `!` and `.`.
    pub fn parse(text: &str) -> Option<Self> {
        let lower = text
            .trim_end_matches(['?', '!', '.'])
            .trim_end()
            .to_lowercase();
        match lower.as_str() {
            "save" => Some(Command::Save),
            "reset" => Some(Command::Reset),
            "why" => Some(Command::Why),
            "help" => Some(Command::Help),
            "quote" => Some(Command::Quote),
            _ => lower
                .strip_prefix("correct:")
                .map(|rest| Command::Correct(rest.trim().to_string())),
        }
    }
}

/// Reply tuning
#[derive(Debug, Clone, Copy)]
pub struct CoachSettings {
    /// Mood suggestions per reply
    pub suggestion_count: usize,
    /// Whether advice and mood replies end with a quote
    pub append_quote: bool,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            suggestion_count: 3,
            append_quote: true,
        }
    }
}

pub struct Coach {
    matcher: IntentMatcher,
    quotes: QuoteBook,
    detector: MoodDetector,
    memory: MoodMemory,
    settings: CoachSettings,
    rng: StdRng,
    last_detection: Option<MoodDetection>,
}

impl Coach {
    pub fn new(
        matcher: IntentMatcher,
        quotes: QuoteBook,
        detector: MoodDetector,
        memory: MoodMemory,
        settings: CoachSettings,
        rng: StdRng,
    ) -> Self {
        Self {
            matcher,
            quotes,
            detector,
            memory,
            settings,
            rng,
            last_detection: None,
        }
    }

    /// Builds a coach from configuration, loading the advice database, quotes and memory.
    pub fn from_config(config: &CoachConfig) -> Result<Self, AppError> {
        let database = match &config.advice_file {
            Some(path) => AdviceDatabase::load(path)?,
            None => AdviceDatabase::builtin(),
        };
        let quotes = QuoteBook::load_or_default(&config.quotes_file);
        let memory = MoodMemory::load(&config.memory_file, config.memory_capacity);
        let detector = MoodDetector::new(Duration::minutes(config.recency_minutes));

        info!(
            "Coach ready: {} advice categories, {} quotes, {} remembered moods",
            database.entries().len(),
            quotes.quotes().len(),
            memory.records().len()
        );

        Ok(Self::new(
            IntentMatcher::new(Arc::new(database)),
            quotes,
            detector,
            memory,
            CoachSettings {
                suggestion_count: config.suggestion_count,
                append_quote: config.append_quote,
            },
            StdRng::from_entropy(),
        ))
    }

    pub fn memory(&self) -> &MoodMemory {
        &self.memory
    }

    /// Processes one user message at the current time
    pub fn respond(&mut self, text: &str) -> ConversationTurn {
        self.respond_at(text, Utc::now())
    }

    /// Processes one user message as if received at `now`
    pub fn respond_at(&mut self, text: &str, now: DateTime<Utc>) -> ConversationTurn {
        let text = text.trim();

        if let Some(command) = Command::parse(text) {
            debug!("Command: {:?}", command);
            return self.run_command(text, command, now);
        }

        let intent = self.matcher.classify(text);
        if let Intent::Category(category) = intent.intent {
            info!(
                "Advice intent: {} (keywords: {})",
                category,
                intent.matched_keywords.join(", ")
            );
            let reply = ResponsePicker::new(
                self.matcher.database(),
                &self.quotes,
                self.settings.append_quote,
            )
            .pick(&category, &mut self.rng);
            return ConversationTurn::new(text, Some(category), reply);
        }

        let detection = self.detector.detect(text, &self.memory, now);
        if !detection.keyword_hit {
            debug!("No advice or mood keyword, using fallback");
            let fallback = self.matcher.database().fallback().to_string();
            return ConversationTurn::new(text, None, fallback);
        }

        info!(
            "Detected mood: {} (compound={:.2})",
            detection.mood, detection.compound
        );
        self.remember(detection.mood, now);

        let mut reply = format!(
            "**Detected mood:** **{}**  \n**Sentiment (compound):** {:.2}\n\n{}",
            detection.mood,
            detection.compound,
            self.suggestion_block(detection.mood)
        );
        reply.push_str("\n\nType `why` if you want my reasoning, or `correct: <mood>` to override.");

        let mut turn = ConversationTurn::new(text, Some(detection.mood.to_string()), reply);
        if text.to_lowercase().contains("why") {
            turn.follow_ups.push(detection.explanation());
        }
        self.last_detection = Some(detection);
        turn
    }

    fn run_command(&mut self, text: &str, command: Command, now: DateTime<Utc>) -> ConversationTurn {
        let reply = match command {
            Command::Save => match self.memory.save() {
                Ok(()) => "Memory saved to disk.".to_string(),
                Err(e) => {
                    error!("Failed to save mood memory: {}", e);
                    format!("Could not save memory: {}", e)
                }
            },
            Command::Reset => match self.memory.reset() {
                Ok(()) => "Cleared recent mood memory.".to_string(),
                Err(e) => {
                    error!("Failed to reset mood memory: {}", e);
                    format!("Could not clear memory: {}", e)
                }
            },
            Command::Correct(wanted) => match wanted.parse::<Mood>() {
                Ok(mood) => {
                    self.remember(mood, now);
                    return ConversationTurn::new(
                        text,
                        Some(mood.to_string()),
                        format!(
                            "Thanks — updated mood to **{}**.\n\n{}",
                            mood,
                            self.suggestion_block(mood)
                        ),
                    );
                }
                Err(_) => format!(
                    "Unknown mood `{}`. Use one of: {}",
                    wanted,
                    Mood::all_labels()
                ),
            },
            Command::Why => match &self.last_detection {
                Some(detection) => detection.explanation(),
                None => WHY_HINT.to_string(),
            },
            Command::Help => WELCOME.to_string(),
            Command::Quote => format!("**Quote:** _{}_", self.quotes.pick(&mut self.rng)),
        };

        ConversationTurn::new(text, None, reply)
    }

    /// Suggestions list, plus the quote line when quotes are enabled
    fn suggestion_block(&mut self, mood: Mood) -> String {
        let tips = mood
            .suggest(self.settings.suggestion_count, &mut self.rng)
            .iter()
            .map(|t| format!("- {}", t))
            .collect::<Vec<_>>()
            .join("\n");

        let mut block = format!("**Suggestions:**\n{}", tips);
        if self.settings.append_quote {
            block.push_str(&format!(
                "\n\n**Quote:** _{}_",
                self.quotes.pick(&mut self.rng)
            ));
        }
        block
    }

    /// Records a mood; a failed write is logged and the turn goes on.
    fn remember(&mut self, mood: Mood, now: DateTime<Utc>) {
        if let Err(e) = self.memory.remember(mood, now) {
            error!("Failed to persist mood memory: {}", e);
        }
    }
}

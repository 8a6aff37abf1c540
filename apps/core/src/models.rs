use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents one advice category: the keywords that select it and the canned replies it offers.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct AdviceEntry {
    /// The category name reported for matched turns (e.g., "motivation").
    #[validate(length(min = 1))]
    pub category: String,
    /// Keywords tested as case-folded substrings of the user text.
    #[validate(length(min = 1))]
    pub keywords: Vec<String>,
    /// The canned messages a reply is drawn from.
    #[validate(length(min = 1))]
    pub messages: Vec<String>,
}

/// On-disk shape of an advice database file.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct AdviceFile {
    /// Reply used when no category matches.
    #[validate(length(min = 1))]
    pub fallback: String,
    /// Categories in match-priority order.
    #[validate(length(min = 1))]
    pub entries: Vec<AdviceEntry>,
}

/// Represents a single exchange with the coach. Never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConversationTurn {
    /// The trimmed text the user sent.
    pub user_text: String,
    /// The advice category or mood that drove the reply, if any.
    pub matched_category: Option<String>,
    /// The main reply.
    pub reply_text: String,
    /// Follow-up messages sent after the main reply (e.g., the mood explanation).
    #[serde(default)]
    pub follow_ups: Vec<String>,
}

impl ConversationTurn {
    pub fn new(user_text: &str, matched_category: Option<String>, reply_text: String) -> Self {
        Self {
            user_text: user_text.to_string(),
            matched_category,
            reply_text,
            follow_ups: Vec::new(),
        }
    }

    /// All messages of the turn in sending order.
    pub fn replies(&self) -> Vec<&str> {
        std::iter::once(self.reply_text.as_str())
            .chain(self.follow_ups.iter().map(String::as_str))
            .collect()
    }
}

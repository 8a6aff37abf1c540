use serde::Serialize;
use tokio::sync::oneshot;

use crate::models::ConversationTurn;

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// A generic internal error within an actor (e.g., a closed channel).
    #[error("Internal system error: {0}")]
    Internal(String),
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the coach actor.
#[derive(Debug)]
pub enum CoachMessage {
    /// A request to process one user message.
    ProcessUserMessage {
        session_id: String,
        content: String,
        /// A channel to send the resulting turn back.
        responder: oneshot::Sender<Result<ConversationTurn, AppError>>,
    },
    /// A command to stop the actor loop.
    Shutdown,
}

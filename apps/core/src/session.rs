use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::actors::coach_actor::CoachHandle;
use crate::error::AppError;
use crate::transport::ChatTransport;

pub const FAREWELL: &str = "Take care! Small steps every day.";

fn is_exit(text: &str) -> bool {
    matches!(text.to_lowercase().as_str(), "quit" | "exit")
}

/// Statistics for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub turns: usize,
    pub replies: usize,
}

/// Runs one chat session over `transport` until the user quits or input ends.
#[instrument(skip_all, fields(session_id = tracing::field::Empty))]
pub async fn run_session<T: ChatTransport>(
    transport: &mut T,
    coach: &CoachHandle,
) -> Result<SessionSummary, AppError> {
    let session_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("session_id", session_id.as_str());
    info!("Session started");

    let mut summary = SessionSummary::default();
    transport.send(coach.welcome()).await?;

    while let Some(line) = transport.receive().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if is_exit(text) {
            transport.send(FAREWELL).await?;
            break;
        }

        let turn = match coach.process_message(session_id.clone(), text.to_string()).await {
            Ok(turn) => turn,
            Err(e) => {
                warn!("Turn failed: {}", e);
                transport.send("Sorry, something went wrong. Please try again.").await?;
                continue;
            }
        };

        summary.turns += 1;
        for reply in turn.replies() {
            transport.send(reply).await?;
            summary.replies += 1;
        }
    }

    info!(turns = summary.turns, "Session ended");
    Ok(summary)
}

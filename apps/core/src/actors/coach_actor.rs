use crate::actors::messages::{AppError, CoachMessage};
use crate::brain::coach::{Coach, WELCOME};
use crate::models::ConversationTurn;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, instrument};

/// How long a caller waits for one turn
const TURN_TIMEOUT: Duration = Duration::from_secs(5);

/// A handle to the coach actor.
///
/// The actor owns the `Coach` (and with it the mood memory and RNG), so turns
/// are processed one at a time. Handles are cheap to clone.
#[derive(Clone)]
pub struct CoachHandle {
    sender: mpsc::Sender<CoachMessage>,
}

impl CoachHandle {
    /// Spawns the actor on the current tokio runtime and returns a handle to it.
    pub fn spawn(coach: Coach) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let runner = CoachRunner { receiver, coach };
        tokio::spawn(async move { runner.run().await });
        Self { sender }
    }

    /// Greeting sent at the start of every session
    pub fn welcome(&self) -> &'static str {
        WELCOME
    }

    /// Processes one user message and returns the resulting turn.
    #[instrument(skip(self, content))]
    pub async fn process_message(
        &self,
        session_id: String,
        content: String,
    ) -> Result<ConversationTurn, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = CoachMessage::ProcessUserMessage {
            session_id,
            content,
            responder: send,
        };
        self.sender.send(msg).await?;
        timeout(TURN_TIMEOUT, recv).await??
    }

    /// Asks the actor to stop. Pending messages sent before this are still processed.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender.send(CoachMessage::Shutdown).await?;
        Ok(())
    }
}

// --- Actor Runner ---
struct CoachRunner {
    receiver: mpsc::Receiver<CoachMessage>,
    coach: Coach,
}

impl CoachRunner {
    async fn run(mut self) {
        info!("Coach actor started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CoachMessage::ProcessUserMessage {
                    session_id,
                    content,
                    responder,
                } => {
                    debug!(session_id = %session_id, "Processing user message");
                    let turn = self.coach.respond(&content);
                    let _ = responder.send(Ok(turn));
                }
                CoachMessage::Shutdown => {
                    info!("Coach actor shutting down...");
                    break;
                }
            }
        }
        info!("Coach actor stopped");
    }
}

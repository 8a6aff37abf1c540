use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};

use crate::error::AppError;

/// Defines the boundary between the coach and whatever delivers chat messages.
///
/// The transport owns message delivery and rendering; the coach only sees one
/// string in and a sequence of strings out per turn.
#[async_trait]
pub trait ChatTransport: Send {
    /// Waits for the next user message. `None` means the user is gone.
    async fn receive(&mut self) -> Result<Option<String>, AppError>;

    /// Delivers one agent reply.
    async fn send(&mut self, reply: &str) -> Result<(), AppError>;
}

/// Line-based terminal transport, stdin/stdout unless built with [`TerminalTransport::with_io`].
///
/// Writes `prompt` before each read and a blank line after each reply.
pub struct TerminalTransport<R = BufReader<Stdin>, W = Stdout> {
    lines: Lines<R>,
    out: W,
    prompt: String,
}

impl TerminalTransport<BufReader<Stdin>, Stdout> {
    pub fn new() -> Self {
        Self::with_io(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), "> ")
    }
}

impl Default for TerminalTransport<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> TerminalTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn with_io(input: R, out: W, prompt: &str) -> Self {
        Self {
            lines: input.lines(),
            out,
            prompt: prompt.to_string(),
        }
    }
}

#[async_trait]
impl<R, W> ChatTransport for TerminalTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn receive(&mut self) -> Result<Option<String>, AppError> {
        self.out.write_all(self.prompt.as_bytes()).await?;
        self.out.flush().await?;
        Ok(self.lines.next_line().await?)
    }

    async fn send(&mut self, reply: &str) -> Result<(), AppError> {
        self.out.write_all(reply.as_bytes()).await?;
        self.out.write_all(b"\n\n").await?;
        self.out.flush().await?;
        Ok(())
    }
}

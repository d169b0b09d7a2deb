use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    /// The outbound queue is at capacity; the message was dropped.
    #[error("Mail queue is full, dropped message '{0}'")]
    QueueFull(String),

    /// The mail worker has stopped; the message was dropped.
    #[error("Mail worker is not running, dropped message '{0}'")]
    QueueClosed(String),

    /// The transport rejected the message.
    #[error("Failed to deliver mail: {0}")]
    Transport(String),
}

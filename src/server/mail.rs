//! Outbound email.
//!
//! Requests never talk to a mail transport directly. They hand an
//! [`EmailMessage`] to [`MailService::enqueue`], which pushes it onto a bounded
//! channel without waiting. A single worker task drains the channel and sends
//! each message through the configured [`MailTransport`], logging the outcome.

use async_trait::async_trait;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};

use crate::server::error::mail::MailError;

/// An email waiting to be delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub subject: String,
    pub sender: String,
    pub recipients: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl EmailMessage {
    pub fn new(
        subject: impl Into<String>,
        sender: impl Into<String>,
        recipients: Vec<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            sender: sender.into(),
            recipients,
            cc: Vec::new(),
            bcc: Vec::new(),
            text_body: None,
            html_body: None,
        }
    }

    pub fn cc(mut self, cc: Vec<String>) -> Self {
        self.cc = cc;
        self
    }

    pub fn bcc(mut self, bcc: Vec<String>) -> Self {
        self.bcc = bcc;
        self
    }

    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    pub fn html_body(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }
}

/// Delivers a single message.
#[async_trait]
pub trait MailTransport: Send + Sync + 'static {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}

/// Transport that writes messages to the log instead of delivering them.
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        tracing::info!(
            subject = %message.subject,
            from = %message.sender,
            to = ?message.recipients,
            cc = ?message.cc,
            bcc = ?message.bcc,
            "Outgoing email"
        );
        if let Some(body) = &message.text_body {
            tracing::debug!("{}", body);
        }

        Ok(())
    }
}

/// Handle to the mail queue. Cloning shares the same queue.
#[derive(Clone)]
pub struct MailService {
    sender: mpsc::Sender<EmailMessage>,
}

impl MailService {
    /// Spawns the mail worker and returns a handle to its queue.
    ///
    /// The worker exits once every `MailService` clone has been dropped and the
    /// queue is drained.
    ///
    /// # Arguments
    /// - `transport` - Transport the worker delivers through
    /// - `capacity` - Maximum number of queued messages, at least 1
    ///
    /// # Returns
    /// - `(MailService, JoinHandle<()>)` - Queue handle and the worker task
    pub fn start<T: MailTransport>(transport: T, capacity: usize) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let worker = tokio::spawn(run_worker(transport, receiver));

        (Self { sender }, worker)
    }

    /// Queues a message without waiting for space.
    ///
    /// # Returns
    /// - `Ok(())` - Message queued
    /// - `Err(MailError::QueueFull(_))` - Queue at capacity, message dropped
    /// - `Err(MailError::QueueClosed(_))` - Worker stopped, message dropped
    pub fn enqueue(&self, message: EmailMessage) -> Result<(), MailError> {
        self.sender.try_send(message).map_err(|e| match e {
            TrySendError::Full(message) => MailError::QueueFull(message.subject),
            TrySendError::Closed(message) => MailError::QueueClosed(message.subject),
        })
    }
}

async fn run_worker<T: MailTransport>(transport: T, mut receiver: mpsc::Receiver<EmailMessage>) {
    tracing::info!("Mail worker started");

    while let Some(message) = receiver.recv().await {
        match transport.send(&message).await {
            Ok(()) => tracing::info!(
                "Sent email '{}' to {} recipient(s)",
                message.subject,
                message.recipients.len()
            ),
            Err(e) => tracing::error!("Failed to send email '{}': {}", message.subject, e),
        }
    }

    tracing::info!("Mail worker stopped");
}

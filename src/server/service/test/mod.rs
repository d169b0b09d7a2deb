use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::server::{
    error::mail::MailError,
    mail::{EmailMessage, MailTransport},
};

mod attachment;
mod auth;
mod calendar_event;
mod communication;
mod contact;
mod dashboard;
mod resource;
mod user;

/// Transport that keeps every delivered message for inspection.
#[derive(Clone, Default)]
pub(super) struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<EmailMessage>>>,
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Builds a JSON object from a `json!` literal.
pub(super) fn body(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("test body must be a JSON object"),
    }
}

//! Values exchanged with a submission backend

use super::traits::SubmitError;
use crate::state::{FieldValue, FormKind, SelectedFile};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

/// A validated form, ready to send
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormPayload {
    pub form: FormKind,
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<SelectedFile>,
}

impl FormPayload {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// Receipt for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl Ack {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for Ack {
    fn default() -> Self {
        Self::new()
    }
}

/// What a running transfer tells its session
#[derive(Debug)]
pub enum TransferEvent {
    /// Percentage complete, 0 to 100
    Progress(f64),
    Finished(Result<Ack, SubmitError>),
}

/// Handle a backend uses to report upload progress
#[derive(Debug, Clone, Default)]
pub struct ProgressReporter {
    sender: Option<UnboundedSender<TransferEvent>>,
}

impl ProgressReporter {
    pub fn new(sender: UnboundedSender<TransferEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Reporter for submissions nobody is watching
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    pub fn report(&self, percent: f64) {
        if let Some(sender) = &self.sender {
            // The session may already be gone; nothing to do then
            let _ = sender.send(TransferEvent::Progress(percent));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_disabled_reporter_drops_progress() {
        let reporter = ProgressReporter::disabled();
        assert!(!reporter.is_enabled());
        reporter.report(50.0);
    }

    #[test]
    fn test_reporter_forwards_progress() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let reporter = ProgressReporter::new(tx);
        reporter.report(12.5);
        match rx.try_recv() {
            Ok(TransferEvent::Progress(p)) => assert_eq!(p, 12.5),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_payload_serializes_untagged_values() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), FieldValue::Text("Ada".to_string()));
        fields.insert(
            "subjects".to_string(),
            FieldValue::Multi(vec!["Physics".to_string()]),
        );
        let payload = FormPayload {
            form: FormKind::Registration,
            fields,
            file: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["form"], "registration");
        assert_eq!(json["fields"]["name"], "Ada");
        assert_eq!(json["fields"]["subjects"][0], "Physics");
        assert!(json.get("file").is_none());
    }

    #[test]
    fn test_ack_references_are_unique() {
        assert_ne!(Ack::new().reference, Ack::new().reference);
    }
}

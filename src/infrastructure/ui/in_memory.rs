//! In-memory UI adapters

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::error::DomainError;
use crate::ui::ports::{FieldSource, Notifier};

/// Map-backed field store
///
/// Stands in for a real document: each entry is one named input element and
/// its current value. UI layers that hold their state as JSON can build one
/// with [`InMemoryFieldSource::from_json`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryFieldSource {
    fields: HashMap<String, String>,
}

impl InMemoryFieldSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field, builder style
    pub fn with_field(mut self, field_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field_id.into(), value.into());
        self
    }

    /// Add or replace a field in place
    pub fn set_field(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field_id.into(), value.into());
    }

    /// Build a field source from a JSON object of field values
    ///
    /// Every member must be a string; anything else is rejected, since a
    /// text input cannot hold a non-string value.
    pub fn from_json(snapshot: serde_json::Value) -> Result<Self, DomainError> {
        let object = snapshot
            .as_object()
            .ok_or_else(|| DomainError::validation("Field snapshot must be a JSON object"))?;

        let mut fields = HashMap::with_capacity(object.len());

        for (field_id, value) in object {
            let value = value.as_str().ok_or_else(|| {
                DomainError::validation(format!("Field '{field_id}' must be a string"))
            })?;

            fields.insert(field_id.clone(), value.to_string());
        }

        Ok(Self { fields })
    }
}

impl FieldSource for InMemoryFieldSource {
    fn value(&self, field_id: &str) -> Option<String> {
        self.fields.get(field_id).cloned()
    }
}

/// Notifier that records every alert instead of displaying it
///
/// Useful both in tests and for embedders that surface alerts through their
/// own UI after the fact.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All alerts shown so far, oldest first
    pub fn alerts(&self) -> Vec<String> {
        self.log().clone()
    }

    /// The most recent alert, if any
    pub fn last_alert(&self) -> Option<String> {
        self.log().last().cloned()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // The log is append-only, so a poisoned lock is still readable
        self.alerts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.log().push(message.to_string());
    }
}

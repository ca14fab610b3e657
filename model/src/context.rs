use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

/// Carries cancellation, an optional deadline and request-scoped values into context-aware
/// validation. Cloning a `ValidationContext` shares its cancellation state.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    token: CancellationToken,
    deadline: Option<DateTime<Utc>>,
    values: Map<String, Value>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_value<S, V>(mut self, key: S, value: V) -> Self
    where
        S: Into<String>,
        V: Into<Value>,
    {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Create a context that is cancelled whenever `self` is, but that can also be cancelled on
    /// its own without affecting `self`. Deadline and values are inherited.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
            values: self.values.clone(),
        }
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.token.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the deadline, if any, has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline
            .map(|deadline| deadline <= Utc::now())
            .unwrap_or(false)
    }
}

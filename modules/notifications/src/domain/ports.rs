use async_trait::async_trait;

use crate::contract::model::{EventContext, EventKind};

/// Output port for the external text-generation collaborator.
///
/// Implementations are expected to fail or stall unpredictably (rate limits,
/// offline); the service wraps every call in a bounded timeout and falls back
/// to the static template for the event kind.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, kind: EventKind, context: &EventContext) -> anyhow::Result<String>;
}

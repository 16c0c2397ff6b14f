pub mod http_client;

pub use http_client::HttpTextGenerator;

use async_trait::async_trait;

use crate::contract::model::{EventContext, EventKind};
use crate::domain::ports::TextGenerator;

/// Stand-in used when no text-generation endpoint is configured.
///
/// Always errs so the dispatcher exercises its deterministic fallback path.
pub struct DisabledTextGenerator;

#[async_trait]
impl TextGenerator for DisabledTextGenerator {
    async fn generate(&self, _kind: EventKind, _context: &EventContext) -> anyhow::Result<String> {
        anyhow::bail!("text generation disabled")
    }
}

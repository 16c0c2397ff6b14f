use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use crate::contract::model::{EventContext, EventKind};
use crate::domain::ports::TextGenerator;

/// HTTP adapter for the text-generation collaborator.
///
/// POSTs `{kind, context}` to `<base>/api/generate` and expects
/// `{"text": "..."}` back.
pub struct HttpTextGenerator {
    client: reqwest::Client,
    base: Url,
}

impl HttpTextGenerator {
    pub fn new(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    #[instrument(
        name = "notifications.http.textgen.generate",
        skip_all,
        fields(base = %self.base, kind = %kind)
    )]
    async fn generate(&self, kind: EventKind, context: &EventContext) -> anyhow::Result<String> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("invalid text-generation base URL"))?
            .extend(&["api", "generate"]);

        let body = serde_json::json!({
            "kind": kind.to_string(),
            "context": {
                "recipient_name": context.recipient_name,
                "waste_type": context.waste_type,
                "zone": context.zone,
                "status": context.status,
            }
        });

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .context("POST /api/generate")?;

        if !response.status().is_success() {
            bail!("HTTP {}", response.status());
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .context("decode text-generation response")?;

        payload
            .get("text")
            .and_then(|t| t.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("empty text in response"))
    }
}

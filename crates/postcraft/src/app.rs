//! Wiring of the production pipeline.

use crate::PostcraftConfig;
use postcraft_content::ContentPipeline;
use postcraft_error::PostcraftResult;
use postcraft_interface::ThreadRandom;
use postcraft_models::OpenRouterClient;
use postcraft_storage::HistoryStore;
use postcraft_templates::TemplateBank;
use std::sync::Arc;
use tracing::instrument;

/// Builds a pipeline backed by OpenRouter, built-in templates and the
/// configured history file.
///
/// Fails only when the API key is missing.
#[instrument(skip(config))]
pub async fn build_pipeline(config: &PostcraftConfig) -> PostcraftResult<ContentPipeline<OpenRouterClient>> {
    let client = OpenRouterClient::new(config.client_config()?)?;
    let templates = TemplateBank::new(Arc::new(ThreadRandom));
    let history = HistoryStore::open(config.history_path()).await;
    Ok(ContentPipeline::new(client, templates, history))
}

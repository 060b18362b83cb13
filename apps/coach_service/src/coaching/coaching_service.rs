use std::sync::Arc;

use anyhow::Result;
use coach_llm::{decode_completion, ChatMessage, CompletionClient};
use serde_json::Value;

use crate::prompts::{
    polish_prompt::PolishPrompt, reading_split_prompt::ReadingSplitPrompt,
    scenario_evaluation_prompt::ScenarioEvaluationPrompt,
};

/// Thin adapters over the completion gateway: render the task's system
/// prompt, hand the user payload through, decode the JSON the model returns.
#[derive(Clone)]
pub struct CoachingService {
    client: Arc<CompletionClient>,
}

impl CoachingService {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn polish(&self, text: &str) -> Result<Value> {
        let messages = [
            ChatMessage::system(PolishPrompt::get_prompt()),
            ChatMessage::user(text),
        ];

        let content = self.client.complete(&messages, true).await?;
        Ok(decode_completion(&content, PolishPrompt::get_schema())?)
    }

    pub async fn evaluate_scenario(&self, history: &Value, scenario_title: &str) -> Result<Value> {
        let messages = [
            ChatMessage::system(ScenarioEvaluationPrompt::get_prompt(scenario_title)),
            ChatMessage::user(serde_json::to_string(history)?),
        ];

        let content = self.client.complete(&messages, true).await?;
        Ok(decode_completion(
            &content,
            ScenarioEvaluationPrompt::get_schema(),
        )?)
    }

    pub async fn process_reading(&self, text: &str) -> Result<Value> {
        let messages = [
            ChatMessage::system(ReadingSplitPrompt::get_prompt()),
            ChatMessage::user(text),
        ];

        let content = self.client.complete(&messages, true).await?;
        Ok(decode_completion(
            &content,
            ReadingSplitPrompt::get_schema(),
        )?)
    }
}

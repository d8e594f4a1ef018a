//! Interpretation assistant: conversation and structured-interpretation
//! operations over the completion backend. Each operation is a single round
//! trip; replies that should be JSON go through the response-extraction
//! protocol in `llm_client::extract`.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::dashboard::service::CompoundBrief;
use crate::llm_client::extract::{extract_json, Extraction};
use crate::llm_client::{ChatMessage, CompletionBackend, LlmError};
use crate::models::catalog::{AnnotationLevel, DataSource, EnvironmentData, QcStatus};

const CHAT_TEMPERATURE: f32 = 0.7;
const INTERPRET_TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 1024;

/// Compound attribute set submitted for interpretation. Crop context fields
/// are optional; the measurement fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub annotation_level: AnnotationLevel,
    pub source: DataSource,
    pub score: i32,
    pub similarity: f64,
    pub qc_status: QcStatus,
    pub compound_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_time: Option<f64>,
}

/// One side of a dashboard comparison as submitted for interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropSide {
    pub name: String,
    pub compounds: Vec<CompoundBrief>,
}

/// Dashboard comparison data submitted for interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub crop_a: CropSide,
    pub crop_b: CropSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentData>,
}

/// Runs one conversational turn: the fixed system instruction plus the
/// caller's history, at moderate randomness.
pub async fn chat(
    llm: &dyn CompletionBackend,
    history: &[ChatMessage],
) -> Result<ChatMessage, LlmError> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(prompts::SYSTEM_PROMPT));
    messages.extend_from_slice(history);

    let content = llm.complete(&messages, CHAT_TEMPERATURE, MAX_TOKENS).await?;
    Ok(ChatMessage::assistant(content))
}

/// Interprets a single compound's attributes; the reply is expected to be a
/// four-field JSON object but may degrade to `Unstructured`.
pub async fn interpret_compound(
    llm: &dyn CompletionBackend,
    compound: &CompoundInfo,
) -> Result<Extraction, LlmError> {
    let data = serde_json::to_string_pretty(compound)?;
    let prompt = prompts::COMPOUND_INTERPRET_TEMPLATE.replace("{compound_data}", &data);
    interpret(llm, prompt).await
}

/// Interprets a two-crop comparison; the reply is expected to carry the
/// comparison summary, environment impact, nested audience insights, and an
/// uncertainty note.
pub async fn interpret_dashboard(
    llm: &dyn CompletionBackend,
    dashboard: &DashboardInfo,
) -> Result<Extraction, LlmError> {
    let data = serde_json::to_string_pretty(dashboard)?;
    let prompt = prompts::DASHBOARD_INTERPRET_TEMPLATE.replace("{dashboard_data}", &data);
    interpret(llm, prompt).await
}

async fn interpret(llm: &dyn CompletionBackend, prompt: String) -> Result<Extraction, LlmError> {
    let messages = vec![
        ChatMessage::system(prompts::SYSTEM_PROMPT),
        ChatMessage::user(prompt),
    ];
    let reply = llm
        .complete(&messages, INTERPRET_TEMPERATURE, MAX_TOKENS)
        .await?;
    Ok(extract_json(&reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the request and replies with a canned string.
    struct RecordingBackend {
        reply: String,
        seen: Mutex<Vec<ChatMessage>>,
        temperature: Mutex<Option<f32>>,
    }

    impl RecordingBackend {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
                temperature: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            temperature: f32,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            *self.seen.lock().unwrap() = messages.to_vec();
            *self.temperature.lock().unwrap() = Some(temperature);
            Ok(self.reply.clone())
        }
    }

    fn sample_compound() -> CompoundInfo {
        CompoundInfo {
            name: "Ginsenoside Rg1".to_string(),
            crop_name: Some("인삼".to_string()),
            origin: Some("금산".to_string()),
            annotation_level: AnnotationLevel::L1,
            source: DataSource::InHouse,
            score: 96,
            similarity: 0.94,
            qc_status: QcStatus::Pass,
            compound_class: "Saponin".to_string(),
            molecular_weight: Some(801.01),
            retention_time: Some(12.3),
        }
    }

    #[tokio::test]
    async fn test_chat_prepends_system_instruction() {
        let backend = RecordingBackend::new("안녕하세요!");
        let history = vec![ChatMessage::user("인삼이 뭐예요?")];

        let reply = chat(&backend, &history).await.unwrap();
        assert_eq!(reply.role, "assistant");
        assert_eq!(reply.content, "안녕하세요!");

        let seen = backend.seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, "system");
        assert_eq!(seen[0].content, prompts::SYSTEM_PROMPT);
        assert_eq!(seen[1].content, "인삼이 뭐예요?");
        assert_eq!(backend.temperature.lock().unwrap().unwrap(), 0.7);
    }

    #[tokio::test]
    async fn test_interpret_compound_substitutes_payload_into_template() {
        let backend = RecordingBackend::new(r#"{"one_line_summary": "요약"}"#);

        let extraction = interpret_compound(&backend, &sample_compound())
            .await
            .unwrap();
        assert_eq!(
            extraction,
            Extraction::Structured(json!({"one_line_summary": "요약"}))
        );

        let seen = backend.seen.lock().unwrap().clone();
        assert_eq!(seen[1].role, "user");
        assert!(seen[1].content.contains("Ginsenoside Rg1"));
        assert!(seen[1].content.contains("confidence_assessment"));
        assert!(!seen[1].content.contains("{compound_data}"));
        assert_eq!(backend.temperature.lock().unwrap().unwrap(), 0.5);
    }

    #[tokio::test]
    async fn test_interpret_compound_strips_fenced_reply() {
        let backend = RecordingBackend::new("```json\n{\"one_line_summary\": \"요약\"}\n```");
        let extraction = interpret_compound(&backend, &sample_compound())
            .await
            .unwrap();
        assert_eq!(
            extraction,
            Extraction::Structured(json!({"one_line_summary": "요약"}))
        );
    }

    #[tokio::test]
    async fn test_interpret_dashboard_unparseable_reply_degrades_to_raw_text() {
        let backend = RecordingBackend::new("설명만 드릴게요");
        let dashboard = DashboardInfo {
            crop_a: CropSide {
                name: "인삼".to_string(),
                compounds: vec![],
            },
            crop_b: CropSide {
                name: "황기".to_string(),
                compounds: vec![],
            },
            environment: None,
        };

        let extraction = interpret_dashboard(&backend, &dashboard).await.unwrap();
        assert_eq!(
            extraction,
            Extraction::Unstructured("설명만 드릴게요".to_string())
        );

        let seen = backend.seen.lock().unwrap().clone();
        assert!(seen[1].content.contains("usage_insights"));
        assert!(seen[1].content.contains("황기"));
    }
}

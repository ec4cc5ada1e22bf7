//! Analysis Invoker: turns a transcript or a profile + pitch deck into
//! analysis text.
//!
//! `Analyzer` is the capability seam; `ModelAnalyzer` calls the hosted model.
//! `AnalysisInvoker` tries the primary analyzer and renders the local template
//! from `fallback` on any failure, so callers always get non-empty text and
//! never see a model error.

pub mod fallback;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::analysis::fallback::fallback_text;
use crate::analysis::prompts::{
    icebreaker_user_message, transcript_user_message, ICEBREAKER_SYSTEM, TRANSCRIPT_SYSTEM,
};
use crate::llm_client::{ChatMessage, CompletionParams, LlmClient, LlmError};

const TEMPERATURE: f32 = 0.7;
const TRANSCRIPT_MAX_TOKENS: u32 = 1000;
const ICEBREAKER_MAX_TOKENS: u32 = 1500;

/// Structured inputs for the profile (icebreaker) variant.
#[derive(Debug, Clone, Copy)]
pub struct ProfileInput<'a> {
    pub prospect_name: &'a str,
    pub company_name: &'a str,
    pub linkedin_bio: &'a str,
    pub pitch_deck: &'a str,
    pub role_level: &'a str,
    pub custom_prompt: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
pub enum AnalysisRequest<'a> {
    Transcript {
        transcript: &'a str,
        custom_prompt: Option<&'a str>,
    },
    Profile(ProfileInput<'a>),
}

impl<'a> AnalysisRequest<'a> {
    /// The caller's prompt if it has any content, else the default rubric.
    pub fn system_prompt(&self) -> &'a str {
        let (custom, default) = match self {
            AnalysisRequest::Transcript { custom_prompt, .. } => (*custom_prompt, TRANSCRIPT_SYSTEM),
            AnalysisRequest::Profile(p) => (p.custom_prompt, ICEBREAKER_SYSTEM),
        };
        custom.filter(|p| !p.trim().is_empty()).unwrap_or(default)
    }

    pub fn user_message(&self) -> String {
        match self {
            AnalysisRequest::Transcript { transcript, .. } => transcript_user_message(transcript),
            AnalysisRequest::Profile(p) => icebreaker_user_message(
                p.prospect_name,
                p.company_name,
                p.role_level,
                p.linkedin_bio,
                p.pitch_deck,
            ),
        }
    }

    pub fn params(&self) -> CompletionParams {
        let max_tokens = match self {
            AnalysisRequest::Transcript { .. } => TRANSCRIPT_MAX_TOKENS,
            AnalysisRequest::Profile(_) => ICEBREAKER_MAX_TOKENS,
        };
        CompletionParams {
            max_tokens,
            temperature: TEMPERATURE,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AnalysisRequest::Transcript { .. } => "transcript",
            AnalysisRequest::Profile(_) => "icebreaker",
        }
    }
}

/// Produces analysis text for a request.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<String, LlmError>;
}

/// Analyzer backed by the hosted chat-completion model.
pub struct ModelAnalyzer {
    llm: LlmClient,
}

impl ModelAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Analyzer for ModelAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<String, LlmError> {
        let user = request.user_message();
        let messages = [
            ChatMessage::system(request.system_prompt()),
            ChatMessage::user(&user),
        ];
        self.llm.call_text(&messages, request.params()).await
    }
}

/// Try-the-model, fall-back-to-template wrapper held in `AppState`.
#[derive(Clone)]
pub struct AnalysisInvoker {
    primary: Arc<dyn Analyzer>,
}

impl AnalysisInvoker {
    pub fn new(primary: Arc<dyn Analyzer>) -> Self {
        Self { primary }
    }

    /// Always returns non-empty text.
    pub async fn analyze(&self, request: &AnalysisRequest<'_>) -> String {
        match self.primary.analyze(request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!(
                    "{} analysis came back blank, using fallback",
                    request.label()
                );
                fallback_text(request)
            }
            Err(e) => {
                warn!("{} analysis failed, using fallback: {e}", request.label());
                fallback_text(request)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubAnalyzer;
    use super::*;
    use crate::analysis::fallback::FALLBACK_NOTICE;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transcript_request(custom_prompt: Option<&str>) -> AnalysisRequest<'_> {
        AnalysisRequest::Transcript {
            transcript: "Rep: Thanks for making time today.",
            custom_prompt,
        }
    }

    fn profile_request() -> AnalysisRequest<'static> {
        AnalysisRequest::Profile(ProfileInput {
            prospect_name: "Dana Reyes",
            company_name: "Northwind",
            linkedin_bio: "VP of Operations at Northwind",
            pitch_deck: "Our platform cuts onboarding time in half",
            role_level: "Mid-level",
            custom_prompt: None,
        })
    }

    #[test]
    fn test_transcript_uses_default_rubric() {
        let req = transcript_request(None);
        assert_eq!(req.system_prompt(), TRANSCRIPT_SYSTEM);
        assert_eq!(
            req.user_message(),
            "Here is the transcript to analyze:\n\nRep: Thanks for making time today."
        );
        assert_eq!(req.params().max_tokens, 1000);
        assert_eq!(req.params().temperature, 0.7);
    }

    #[test]
    fn test_custom_prompt_replaces_rubric() {
        let req = transcript_request(Some("Focus on objection handling."));
        assert_eq!(req.system_prompt(), "Focus on objection handling.");
    }

    #[test]
    fn test_blank_custom_prompt_ignored() {
        assert_eq!(transcript_request(Some("  ")).system_prompt(), TRANSCRIPT_SYSTEM);
    }

    #[test]
    fn test_profile_user_message_has_all_fields() {
        let req = profile_request();
        let msg = req.user_message();
        assert!(msg.contains("PROSPECT: Dana Reyes\n"));
        assert!(msg.contains("COMPANY: Northwind\n"));
        assert!(msg.contains("ROLE LEVEL: Mid-level\n"));
        assert!(msg.contains("LINKEDIN PROFILE:\nVP of Operations at Northwind\n"));
        assert!(msg.contains("PITCH DECK CONTENT:\nOur platform cuts onboarding time in half\n"));
        assert_eq!(req.system_prompt(), ICEBREAKER_SYSTEM);
        assert_eq!(req.params().max_tokens, 1500);
    }

    #[test]
    fn test_profile_fields_inserted_verbatim() {
        let req = AnalysisRequest::Profile(ProfileInput {
            prospect_name: "Dana {company_name}",
            company_name: "Northwind",
            linkedin_bio: "Writes about templating: {pitch_deck} and {role_level}",
            pitch_deck: "Deck body",
            role_level: "Mid-level",
            custom_prompt: None,
        });
        assert_eq!(
            req.user_message(),
            "\nPROSPECT: Dana {company_name}\nCOMPANY: Northwind\nROLE LEVEL: Mid-level\n\n\
             LINKEDIN PROFILE:\nWrites about templating: {pitch_deck} and {role_level}\n\n\
             PITCH DECK CONTENT:\nDeck body\n"
        );
    }

    #[test]
    fn test_transcript_text_inserted_verbatim() {
        let req = AnalysisRequest::Transcript {
            transcript: "Rep: our {transcript} tag",
            custom_prompt: None,
        };
        assert_eq!(
            req.user_message(),
            "Here is the transcript to analyze:\n\nRep: our {transcript} tag"
        );
    }

    #[tokio::test]
    async fn test_invoker_passes_model_text_through() {
        let invoker = AnalysisInvoker::new(Arc::new(StubAnalyzer::replying("Great call.")));
        assert_eq!(invoker.analyze(&transcript_request(None)).await, "Great call.");
    }

    #[tokio::test]
    async fn test_invoker_falls_back_on_failure() {
        let invoker = AnalysisInvoker::new(Arc::new(StubAnalyzer::failing(503)));
        let req = profile_request();
        let text = invoker.analyze(&req).await;
        assert_eq!(text, fallback_text(&req));
        assert!(text.contains(FALLBACK_NOTICE));
    }

    #[tokio::test]
    async fn test_invoker_falls_back_on_blank_text() {
        let invoker = AnalysisInvoker::new(Arc::new(StubAnalyzer::replying("\n  ")));
        let req = transcript_request(None);
        assert_eq!(invoker.analyze(&req).await, fallback_text(&req));
    }

    #[tokio::test]
    async fn test_model_analyzer_sends_prompt_pair() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "max_tokens": 1500,
                "messages": [{"role": "system", "content": ICEBREAKER_SYSTEM}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "Lead with onboarding metrics."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let llm = LlmClient::new("sk-test".to_string(), server.uri()).unwrap();
        let invoker = AnalysisInvoker::new(Arc::new(ModelAnalyzer::new(llm)));
        assert_eq!(
            invoker.analyze(&profile_request()).await,
            "Lead with onboarding metrics."
        );
    }

    #[tokio::test]
    async fn test_model_outage_yields_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let llm = LlmClient::new("sk-test".to_string(), server.uri()).unwrap();
        let invoker = AnalysisInvoker::new(Arc::new(ModelAnalyzer::new(llm)));
        let req = transcript_request(None);
        assert_eq!(invoker.analyze(&req).await, fallback_text(&req));
    }
}

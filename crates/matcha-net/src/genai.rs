//! REST wire types and client for the `generateContent` endpoint.
//!
//! The request carries the fixed persona as a system instruction, the
//! single latest user turn, and the sampling temperature. The API key is
//! read from the process environment at call time; a missing key is just
//! another call failure for the caller to absorb.

use std::sync::Arc;

use rustls::ClientConfig;
use serde::{Deserialize, Serialize};

use matcha_types::config::AssistantConfig;
use matcha_types::error::{MatchaError, Result};

use crate::http::{self, HttpsUrl};
use crate::textgen::TextGenService;

/// Environment variable holding the endpoint API key.
pub const API_KEY_ENV: &str = "MATCHA_API_KEY";

/// Endpoint host.
const API_HOST: &str = "generativelanguage.googleapis.com";

// -- Request wire types -------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: ReqContent<'a>,
    contents: Vec<ReqContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct ReqContent<'a> {
    parts: Vec<ReqPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ReqPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

// -- Response wire types ------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<RespContent>,
}

#[derive(Debug, Deserialize)]
struct RespContent {
    #[serde(default)]
    parts: Vec<RespPart>,
}

#[derive(Debug, Deserialize)]
struct RespPart {
    #[serde(default)]
    text: String,
}

/// Serialize the request body for one user turn.
fn build_body(cfg: &AssistantConfig, prompt: &str) -> Result<String> {
    let req = GenerateRequest {
        system_instruction: ReqContent {
            parts: vec![ReqPart { text: &cfg.persona }],
        },
        contents: vec![ReqContent {
            parts: vec![ReqPart { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: cfg.temperature,
        },
    };
    Ok(serde_json::to_string(&req)?)
}

/// Pull the reply text out of a response body.
///
/// Concatenates the text parts of the first candidate; an absent or
/// empty candidate yields an empty string (the assistant substitutes its
/// own fallback line for that case).
fn extract_text(body: &str) -> Result<String> {
    let resp: GenerateResponse = serde_json::from_str(body)?;
    let text = resp
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text.trim().to_string())
}

// -- Client -------------------------------------------------------------------

/// [`TextGenService`] backed by the hosted `generateContent` REST API.
pub struct GenAiClient {
    cfg: AssistantConfig,
    tls: Arc<ClientConfig>,
}

impl GenAiClient {
    pub fn new(cfg: AssistantConfig) -> Self {
        Self {
            cfg,
            tls: http::tls_config(),
        }
    }

    fn endpoint(&self, key: &str) -> Result<HttpsUrl> {
        HttpsUrl::parse(&format!(
            "https://{API_HOST}/v1beta/models/{}:generateContent?key={key}",
            self.cfg.model,
        ))
    }
}

impl TextGenService for GenAiClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| MatchaError::TextGen(format!("{API_KEY_ENV} is not set")))?;
        let url = self.endpoint(&key)?;
        let body = build_body(&self.cfg, prompt)?;

        log::debug!("text-gen request: model={}", self.cfg.model);
        let resp = http::post_json(&self.tls, &url, &body)?;
        if resp.status != 200 {
            let snippet: String = resp.body_text().chars().take(200).collect();
            return Err(MatchaError::TextGen(format!(
                "endpoint returned {}: {snippet}",
                resp.status,
            )));
        }
        extract_text(&resp.body_text())
    }
}

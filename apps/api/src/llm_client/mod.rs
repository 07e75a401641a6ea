/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions MUST go through this module.
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Default model for assessment and learning-path generation.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Model for structured resume extraction.
pub const EXTRACTION_MODEL: &str = "gemini-2.5-flash";
const MAX_RETRIES: u32 = 3;
const BASE_DELAY_MS: u64 = 2000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited on all API keys after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("GEMINI_API_KEY not configured")]
    NoApiKeys,
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
    #[serde(default)]
    status: String,
}

/// The single Gemini client used by all services.
/// Wraps `generateContent` with key rotation and exponential backoff:
/// within one round every key is tried; a rate-limited key moves on to the
/// next; only when every key is exhausted does the client sleep and retry.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_keys: Vec<String>,
}

impl GeminiClient {
    /// `raw_keys` is the GEMINI_API_KEY env value: one key, or several
    /// separated by commas.
    pub fn new(raw_keys: &str) -> Self {
        let api_keys = raw_keys
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_keys,
        }
    }

    pub fn key_count(&self) -> usize {
        self.api_keys.len()
    }

    /// Makes a raw `generateContent` call, returning the response text.
    /// Rate-limit responses rotate to the next key; any other API error
    /// fails immediately.
    pub async fn call(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        if self.api_keys.is_empty() {
            return Err(LlmError::NoApiKeys);
        }

        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        // Shuffle keys per call to spread load when multiple keys are provided.
        let mut keys = self.api_keys.clone();
        keys.shuffle(&mut rand::thread_rng());

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff with jitter: ~2s, 4s, 8s
                let jitter = rand::thread_rng().gen_range(0..1000);
                let delay =
                    std::time::Duration::from_millis(BASE_DELAY_MS * (1 << (attempt - 1)) + jitter);
                warn!(
                    "All keys rate limited (attempt {attempt}/{MAX_RETRIES}), retrying in {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            for key in &keys {
                let url = format!("{GEMINI_API_BASE}/{model}:generateContent?key={key}");

                let response = self
                    .client
                    .post(&url)
                    .header("content-type", "application/json")
                    .json(&request_body)
                    .send()
                    .await?;

                let status = response.status();

                if status.is_success() {
                    let parsed: GeminiResponse = response.json().await?;
                    let text = parsed
                        .candidates
                        .into_iter()
                        .next()
                        .and_then(|c| c.content.parts.into_iter().next())
                        .map(|p| p.text)
                        .ok_or(LlmError::EmptyContent)?;

                    debug!("LLM call succeeded (model: {model})");
                    return Ok(text);
                }

                let body = response.text().await.unwrap_or_default();
                if status.as_u16() == 429 || body.contains("RESOURCE_EXHAUSTED") {
                    warn!("Rate limit hit for key ...{}", key_suffix(key));
                    continue; // try next key
                }

                let message = serde_json::from_str::<GeminiApiError>(&body)
                    .map(|e| {
                        if e.error.status.is_empty() {
                            e.error.message
                        } else {
                            format!("{}: {}", e.error.status, e.error.message)
                        }
                    })
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }
        }

        Err(LlmError::RateLimited {
            retries: MAX_RETRIES,
        })
    }

    /// Convenience method that calls the LLM and deserializes the text
    /// response as JSON. The prompt must instruct the model to return JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, model).await?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(&text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Last five characters of a key for log lines, safe on any UTF-8 input.
fn key_suffix(key: &str) -> &str {
    key.char_indices()
        .rev()
        .nth(4)
        .map_or(key, |(i, _)| &key[i..])
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_new_splits_comma_separated_keys() {
        let client = GeminiClient::new("key-one, key-two ,key-three");
        assert_eq!(client.key_count(), 3);
    }

    #[test]
    fn test_new_ignores_empty_segments() {
        let client = GeminiClient::new("key-one,,  ,key-two");
        assert_eq!(client.key_count(), 2);
    }

    #[tokio::test]
    async fn test_call_without_keys_fails_fast() {
        let client = GeminiClient::new("");
        let err = client.call("hello", DEFAULT_MODEL).await.unwrap_err();
        assert!(matches!(err, LlmError::NoApiKeys));
    }

    #[test]
    fn test_key_suffix_short_key() {
        assert_eq!(key_suffix("abc"), "abc");
        assert_eq!(key_suffix("abcdefgh"), "defgh");
    }

    #[test]
    fn test_key_suffix_multibyte_key() {
        assert_eq!(key_suffix("héllo-wörld"), "wörld");
        assert_eq!(key_suffix("ключ"), "ключ");
    }

    #[test]
    fn test_gemini_response_deserializes() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello"}], "role": "model"}}
            ]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "hello");
    }
}

//! Client for the external AI gateway (OpenAI-compatible chat completions).
//!
//! Both endpoints are stateless proxies: validate, build a prompt, forward,
//! map provider errors. No caching, no retries.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use validator::Validate;

pub const SUGGESTION_MODEL: &str = "google/gemini-3-flash-preview";
const IMAGE_MODEL: &str = "google/gemini-2.5-flash-image";

#[derive(Debug, Error)]
pub enum AiError {
    /// Provider returned 429.
    #[error("Rate limits exceeded. Please try again later.")]
    RateLimited,
    /// Provider returned 402.
    #[error("AI credits exhausted. Please try again later.")]
    CreditsExhausted,
    #[error("AI gateway error: {status}")]
    Gateway { status: u16 },
    #[error("request to AI gateway failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("AI gateway returned no usable content")]
    EmptyResponse,
}

/// Body for POST /api/ai/suggestions.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SuggestionRequest {
    #[validate(length(min = 1, max = 5000, message = "Description is required and must be at most 5000 characters"))]
    pub description: String,
    #[validate(length(max = 100, message = "Style preference too long"))]
    pub style_preference: Option<String>,
    #[validate(length(max = 10, message = "Too many images"))]
    pub current_image_urls: Option<Vec<String>>,
}

/// Body for POST /api/ai/generate.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 5, max = 2000, message = "Prompt must be between 5 and 2000 characters"))]
    pub prompt: String,
    #[validate(length(max = 200, message = "Title too long"))]
    pub title: Option<String>,
    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: Option<String>,
    #[validate(length(max = 100, message = "Style preference too long"))]
    pub style_preference: Option<String>,
    #[validate(url(message = "Invalid URL"), length(max = 2000, message = "URL too long"))]
    pub original_image_url: Option<String>,
    #[validate(url(message = "Invalid URL"), length(max = 2000, message = "URL too long"))]
    pub inspiration_image_url: Option<String>,
}

/// A generated design image plus the model's accompanying text, if any.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDesign {
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct AiClient {
    http: reqwest::Client,
    gateway_url: String,
    api_key: String,
}

impl AiClient {
    pub fn new(gateway_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            gateway_url,
            api_key,
        }
    }

    pub fn from_env() -> Self {
        let gateway_url = std::env::var("AI_GATEWAY_URL").expect("AI_GATEWAY_URL must be set");
        let api_key = std::env::var("AI_GATEWAY_API_KEY").expect("AI_GATEWAY_API_KEY must be set");
        Self::new(gateway_url, api_key)
    }

    async fn post_completion(&self, body: serde_json::Value) -> Result<serde_json::Value, AiError> {
        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.gateway_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "AI gateway returned an error");
            return Err(match status.as_u16() {
                429 => AiError::RateLimited,
                402 => AiError::CreditsExhausted,
                code => AiError::Gateway { status: code },
            });
        }

        Ok(response.json().await?)
    }

    /// Text-only design suggestions for a redesign brief.
    pub async fn design_suggestions(&self, input: &SuggestionRequest) -> Result<String, AiError> {
        let (system, user) = suggestion_prompts(input);

        let data = self
            .post_completion(json!({
                "model": SUGGESTION_MODEL,
                "messages": [
                    { "role": "system", "content": system },
                    { "role": "user", "content": user },
                ],
            }))
            .await?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or(AiError::EmptyResponse)
    }

    /// Generate a design image, optionally conditioned on the original garment
    /// photo and/or an inspiration reference.
    pub async fn generate_design(
        &self,
        input: &GenerateRequest,
    ) -> Result<GeneratedDesign, AiError> {
        let prompt = generate_prompt(input);

        let mut parts = vec![json!({ "type": "text", "text": prompt })];
        if let Some(url) = &input.original_image_url {
            parts.push(json!({ "type": "image_url", "image_url": { "url": url } }));
        }
        if let Some(url) = &input.inspiration_image_url {
            parts.push(json!({ "type": "image_url", "image_url": { "url": url } }));
        }

        let content = if parts.len() > 1 {
            serde_json::Value::Array(parts)
        } else {
            serde_json::Value::String(prompt)
        };

        let data = self
            .post_completion(json!({
                "model": IMAGE_MODEL,
                "messages": [{ "role": "user", "content": content }],
                "modalities": ["image", "text"],
            }))
            .await?;

        let image_url = data["choices"][0]["message"]["images"][0]["image_url"]["url"]
            .as_str()
            .map(str::to_string);
        let description = data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string);

        if image_url.is_none() && description.is_none() {
            return Err(AiError::EmptyResponse);
        }

        Ok(GeneratedDesign {
            image_url,
            description,
        })
    }
}

fn suggestion_prompts(input: &SuggestionRequest) -> (String, String) {
    let style = input.style_preference.as_deref().unwrap_or("modern");

    let system = format!(
        "You are an expert fashion designer and sustainable fashion consultant specializing in \
         clothing redesign and upcycling. Your role is to provide creative, practical, and \
         stylish suggestions for transforming existing garments into new, fashionable pieces.\n\n\
         When providing suggestions:\n\
         1. Consider the customer's style preference ({style})\n\
         2. Focus on sustainable practices - repurposing, minimal waste\n\
         3. Provide specific, actionable design ideas\n\
         4. Include color palette suggestions when relevant\n\
         5. Consider current fashion trends while respecting timeless elegance\n\
         6. Suggest multiple options ranging from subtle to dramatic transformations\n\n\
         Format your response with clear sections:\n\
         - **Design Concept**: A brief creative vision\n\
         - **Suggested Transformations**: 3-4 specific ideas\n\
         - **Color & Material Suggestions**: Complementary elements\n\
         - **Styling Tips**: How to wear the redesigned piece\n\
         - **Sustainability Note**: Environmental benefits of this redesign"
    );

    let user = format!(
        "A customer wants to redesign their clothing with the following details:\n\n\
         Description: {}\n\
         Style Preference: {style}\n\n\
         Please provide creative design suggestions and recommendations for transforming this \
         garment into something beautiful and sustainable.",
        input.description
    );

    (system, user)
}

fn generate_prompt(input: &GenerateRequest) -> String {
    let mut prompt = String::from(
        "You are a professional fashion designer. Generate a realistic, high-quality fashion \
         design image.\n\n",
    );

    if let Some(title) = &input.title {
        prompt.push_str(&format!("Project: {title}\n"));
    }
    if let Some(description) = &input.description {
        prompt.push_str(&format!("Customer's vision: {description}\n"));
    }
    prompt.push_str(&format!("Design request: {}\n", input.prompt));
    prompt.push_str(&format!(
        "Style: {}\n\n",
        input.style_preference.as_deref().unwrap_or("modern elegant")
    ));

    let has_original = input.original_image_url.is_some();
    let has_inspiration = input.inspiration_image_url.is_some();

    if has_original && has_inspiration {
        prompt.push_str(
            "IMPORTANT: I am providing TWO reference images. The FIRST image is the ORIGINAL \
             garment/cloth that needs to be redesigned. The SECOND image is the DESIRED DESIGN / \
             INSPIRATION showing what the customer wants it to look like. Please generate a \
             realistic redesigned garment that transforms the original cloth into a design \
             inspired by the second reference image. Combine the fabric/material from the \
             original with the silhouette, style, and design elements from the inspiration \
             image.\n\n",
        );
    } else if has_original {
        prompt.push_str(
            "IMPORTANT: The provided image is the ORIGINAL garment/cloth. Please generate a \
             realistic redesigned version of this garment based on the design request above.\n\n",
        );
    } else if has_inspiration {
        prompt.push_str(
            "IMPORTANT: The provided image is a DESIGN INSPIRATION / REFERENCE. Please generate \
             a new realistic garment design inspired by this reference image.\n\n",
        );
    }

    prompt.push_str(
        "Requirements: Photorealistic fashion photography quality, professional studio \
         lighting, detailed fabric textures, wearable garment design, sustainable fashion \
         upcycling concept. Ultra high resolution.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_input() -> GenerateRequest {
        GenerateRequest {
            prompt: "Turn this into a summer dress".to_string(),
            title: Some("Blue silk revival".to_string()),
            description: None,
            style_preference: None,
            original_image_url: None,
            inspiration_image_url: None,
        }
    }

    #[test]
    fn suggestion_prompt_defaults_style_to_modern() {
        let input = SuggestionRequest {
            description: "An old denim jacket".to_string(),
            style_preference: None,
            current_image_urls: None,
        };
        let (system, user) = suggestion_prompts(&input);
        assert!(system.contains("style preference (modern)"));
        assert!(user.contains("Style Preference: modern"));
        assert!(user.contains("An old denim jacket"));
    }

    #[test]
    fn generate_prompt_mentions_both_references_when_present() {
        let mut input = generate_input();
        input.original_image_url = Some("https://example.com/a.jpg".to_string());
        input.inspiration_image_url = Some("https://example.com/b.jpg".to_string());
        let prompt = generate_prompt(&input);
        assert!(prompt.contains("TWO reference images"));
        assert!(prompt.contains("Project: Blue silk revival"));
    }

    #[test]
    fn generate_prompt_original_only() {
        let mut input = generate_input();
        input.original_image_url = Some("https://example.com/a.jpg".to_string());
        let prompt = generate_prompt(&input);
        assert!(prompt.contains("ORIGINAL garment/cloth. Please generate"));
        assert!(!prompt.contains("TWO reference images"));
    }

    #[test]
    fn generate_prompt_without_images_has_no_reference_note() {
        let prompt = generate_prompt(&generate_input());
        assert!(!prompt.contains("IMPORTANT"));
        assert!(prompt.contains("Design request: Turn this into a summer dress"));
    }
}

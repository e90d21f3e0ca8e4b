use actix_web::mime;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::CoachError;

/// Thin JSON-over-HTTP client shared by the provider gateways.
#[derive(Clone)]
pub(crate) struct LLMClient {
    client: reqwest::Client,
    base_url: String,
}

impl LLMClient {
    pub(crate) fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) async fn post_json<B, R>(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &B,
    ) -> Result<R, CoachError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CoachError::Provider(format!(
                "status {status}, text {text}"
            )));
        }

        if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
            let content_type: mime::Mime = content_type
                .to_str()?
                .parse()
                .map_err(|e: mime::FromStrError| CoachError::Provider(e.to_string()))?;
            if content_type.essence_str() != mime::APPLICATION_JSON.essence_str() {
                return Err(CoachError::Provider(format!(
                    "content-type: {content_type}, expected: {}",
                    mime::APPLICATION_JSON
                )));
            }
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

use std::env;

use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::config::Config;
use crate::error::{ConvaiError, Result};
use crate::model::{Conversation, ConversationListItem, ConversationListPage};

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const BASE_URL_VAR: &str = "ELEVENLABS_BASE_URL";

const API_KEY_HEADER: &str = "xi-api-key";

pub struct ConvaiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ConvaiClient {
    /// Precedence for the base URL:
    /// 1) ELEVENLABS_BASE_URL (points the client at a local test server)
    /// 2) the public API host
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url, config.api_key.clone())
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn fetch_conversation(&self, conversation_id: &str) -> Result<Conversation> {
        let url = format!("{}/v1/convai/conversations/{conversation_id}", self.base_url);
        let response = self.send(self.http.get(url))?;
        Ok(response.json()?)
    }

    /// Returns at most `limit` items in the order the server provided them.
    pub fn list_conversations(&self, limit: u32, offset: u32) -> Result<Vec<ConversationListItem>> {
        let url = format!("{}/v1/convai/conversations", self.base_url);
        let response = self.send(
            self.http
                .get(url)
                .query(&[("page_size", limit), ("offset", offset)]),
        )?;
        let page: ConversationListPage = response.json()?;
        let mut conversations = page.conversations;
        conversations.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(conversations)
    }

    pub fn fetch_audio(&self, conversation_id: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/v1/convai/conversations/{conversation_id}/audio",
            self.base_url
        );
        let response = self.send(self.http.get(url))?;
        Ok(response.bytes()?.to_vec())
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send()?;
        check_status(response)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(ConvaiError::Api {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

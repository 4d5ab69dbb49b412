//! HTTP client for the board API

use crate::error::{LoadError, Result};
use crate::loader::BoardLoader;
use async_trait::async_trait;
use reqwest::Client;
use taskboard_dnd::{Board, BoardId};
use tracing::debug;

/// Extract a human-readable message from a JSON error body.
///
/// Tries `message`, then `error`, then falls back to the raw body.
fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json.get("message").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = json.get("error").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
    }
    body.to_string()
}

/// Loads boards from `GET {api_root}/v1/boards/{id}`
#[derive(Debug, Clone)]
pub struct HttpBoardLoader {
    client: Client,
    api_root: String,
}

impl HttpBoardLoader {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_root)
    }

    /// Use a preconfigured client
    pub fn with_client(client: Client, api_root: impl Into<String>) -> Self {
        let api_root = api_root.into().trim_end_matches('/').to_string();
        Self { client, api_root }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// URL of a single board
    pub fn board_url(&self, id: &BoardId) -> String {
        format!(
            "{}/v1/boards/{}",
            self.api_root,
            urlencoding::encode(id.as_str())
        )
    }

    async fn check_response(
        &self,
        id: &BoardId,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        if status_code == 404 {
            return Err(LoadError::not_found(id));
        }
        let body = response.text().await.unwrap_or_default();
        Err(LoadError::Http {
            status: status_code,
            message: extract_error_message(&body),
        })
    }
}

#[async_trait]
impl BoardLoader for HttpBoardLoader {
    async fn fetch_board(&self, id: &BoardId) -> Result<Board> {
        let url = self.board_url(id);
        debug!(%url, "fetching board");

        let response = self.client.get(&url).send().await?;
        let response = self.check_response(id, response).await?;
        let body = response.text().await?;
        let board: Board = match serde_json::from_str(&body) {
            Ok(board) => board,
            Err(e) => return Err(LoadError::decode(&url, e)),
        };

        debug!(
            board = %board.id,
            columns = board.columns.len(),
            cards = board.card_count(),
            "board fetched"
        );
        Ok(board)
    }
}

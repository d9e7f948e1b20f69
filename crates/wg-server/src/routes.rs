//! Request routing, independent of the socket layer.

use serde_json::{Map, Value, json};
use wg_completion::Completer;
use wg_core::Puzzle;
use wg_store::{PuzzleStore, PuzzleUpdate};

use crate::error::ApiError;

/// Paths served, relative to the host root.
pub const CREATE_PUZZLE: &str = "/api/create-puzzle";
pub const SAVE_PUZZLE: &str = "/api/save-puzzle";
pub const UPDATE_QUALITY: &str = "/api/update-puzzle-quality";
pub const COMPLETION_PROXY: &str = "/api/openai";
pub const COMPLETION_PROXY_ALIAS: &str = "/openai";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    CreatePuzzle,
    SavePuzzle,
    UpdateQuality,
    Completion,
}

impl Route {
    fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or(path);
        match path.strip_suffix('/').unwrap_or(path) {
            CREATE_PUZZLE => Some(Self::CreatePuzzle),
            SAVE_PUZZLE => Some(Self::SavePuzzle),
            UPDATE_QUALITY => Some(Self::UpdateQuality),
            COMPLETION_PROXY | COMPLETION_PROXY_ALIAS => Some(Self::Completion),
            _ => None,
        }
    }
}

/// Status plus optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    #[must_use]
    pub const fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// `200 {"success": true}`
    #[must_use]
    pub fn success() -> Self {
        Self::json(200, json!({ "success": true }))
    }

    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self::json(err.status(), err.body())
    }
}

/// The request handler: store operations and the completion proxy.
pub struct Api<C> {
    store: PuzzleStore,
    completer: C,
}

impl<C: Completer> Api<C> {
    #[must_use]
    pub const fn new(store: PuzzleStore, completer: C) -> Self {
        Self { store, completer }
    }

    #[must_use]
    pub const fn store(&self) -> &PuzzleStore {
        &self.store
    }

    /// Serve one request. Never fails; errors become error responses.
    pub async fn handle(&self, method: &str, path: &str, body: &[u8]) -> ApiResponse {
        let Some(route) = Route::from_path(path) else {
            return ApiError::UnknownRoute(path.to_string()).into();
        };
        if method.eq_ignore_ascii_case("OPTIONS") {
            return ApiResponse::no_content();
        }
        if !method.eq_ignore_ascii_case("POST") {
            return ApiError::MethodNotAllowed.into();
        }

        let result = match parse_object(body) {
            Ok(fields) => match route {
                Route::CreatePuzzle => self.create_puzzle(fields).await,
                Route::SavePuzzle => self.save_puzzle(fields).await,
                Route::UpdateQuality => self.update_quality(&fields).await,
                Route::Completion => self.complete(&fields).await,
            },
            Err(err) => Err(err),
        };

        match result {
            Ok(response) => response,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!(path, %err, "request failed");
                } else {
                    tracing::debug!(path, status = err.status(), %err, "request rejected");
                }
                err.into()
            }
        }
    }

    async fn create_puzzle(&self, fields: Map<String, Value>) -> Result<ApiResponse, ApiError> {
        require_title_and_words(&fields)?;
        let puzzle: Puzzle = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ApiError::Validation(format!("Invalid puzzle: {e}")))?;
        self.store
            .create(puzzle)
            .await
            .map_err(|e| ApiError::store("create puzzle", e))?;
        Ok(ApiResponse::success())
    }

    async fn save_puzzle(&self, fields: Map<String, Value>) -> Result<ApiResponse, ApiError> {
        require_title_and_words(&fields)?;
        let update: PuzzleUpdate = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ApiError::Validation(format!("Invalid puzzle: {e}")))?;
        self.store
            .save(update)
            .await
            .map_err(|e| ApiError::store("save puzzle", e))?;
        Ok(ApiResponse::success())
    }

    async fn update_quality(&self, fields: &Map<String, Value>) -> Result<ApiResponse, ApiError> {
        let title = non_empty_str(fields, "title");
        let quality = fields.get("quality").and_then(Value::as_f64);
        let (Some(title), Some(quality)) = (title, quality) else {
            return Err(ApiError::Validation("Missing title or quality".into()));
        };
        self.store
            .update_quality(title, quality)
            .await
            .map_err(|e| ApiError::store("update puzzle quality", e))?;
        Ok(ApiResponse::success())
    }

    async fn complete(&self, fields: &Map<String, Value>) -> Result<ApiResponse, ApiError> {
        let prompt =
            non_empty_str(fields, "prompt").ok_or_else(|| ApiError::Validation("Missing prompt".into()))?;
        tracing::debug!(prompt_len = prompt.len(), "proxying completion");
        let payload = self.completer.complete_raw(prompt).await?;
        Ok(ApiResponse::json(200, payload))
    }
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(ApiError::Validation("Request body must be a JSON object".into())),
        Err(e) => Err(ApiError::Validation(format!("Invalid JSON body: {e}"))),
    }
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn require_title_and_words(fields: &Map<String, Value>) -> Result<(), ApiError> {
    let words_ok = fields
        .get("words")
        .and_then(Value::as_array)
        .is_some_and(|words| words.iter().all(Value::is_string));
    if non_empty_str(fields, "title").is_none() || !words_ok {
        return Err(ApiError::Validation("Missing title or words".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_ignore_query_and_trailing_slash() {
        assert_eq!(Route::from_path("/api/save-puzzle/"), Some(Route::SavePuzzle));
        assert_eq!(Route::from_path("/openai?x=1"), Some(Route::Completion));
        assert_eq!(Route::from_path("/api/delete-puzzle"), None);
    }

    #[test]
    fn words_must_be_strings() {
        let fields: Map<String, Value> =
            serde_json::from_value(json!({ "title": "t", "words": ["a", 3] })).unwrap();
        assert!(require_title_and_words(&fields).is_err());
    }
}

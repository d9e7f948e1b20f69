//! # wg-server
//!
//! The wordgrid HTTP surface: three puzzle store operations and a
//! completion proxy, all POST-only with JSON bodies.
//!
//! | Path | Body | Success |
//! |---|---|---|
//! | `/api/create-puzzle` | `{title, words, ...}` | `{success:true}` |
//! | `/api/save-puzzle` | `{title, words, ...}` | `{success:true}` |
//! | `/api/update-puzzle-quality` | `{title, quality}` | `{success:true}` |
//! | `/api/openai`, `/openai` | `{prompt}` | upstream payload |
//!
//! Errors are `{ "error": "<message>" }` with the status from
//! [`ApiError::status`]. Routing lives in [`Api::handle`], a plain async
//! function of method, path and body; [`Server`] only moves bytes.

mod error;
mod routes;
mod serve;

pub use error::{ApiError, ServerError};
pub use routes::{
    Api, ApiResponse, COMPLETION_PROXY, COMPLETION_PROXY_ALIAS, CREATE_PUZZLE, SAVE_PUZZLE, UPDATE_QUALITY,
};
pub use serve::{Server, ShutdownHandle};

pub mod app_context;
pub mod config_warnings;
pub mod session;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use session::GridSession;

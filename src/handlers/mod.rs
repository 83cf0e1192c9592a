mod error;
mod generate;
mod health;
mod history;
mod metrics;
mod status;

pub use error::ApiError;
pub use generate::generate_handler;
pub use health::health_handler;
pub use history::{append_history_handler, clear_history_handler, list_history_handler};
pub use metrics::metrics_handler;
pub use status::status_handler;

//! SMDPRO backend: REST API over the Projects, Materials, BOM and Panels tables.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;

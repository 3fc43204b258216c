//! beacon - minimal HTTP probe and info service.
//!
//! Exposes four static routes: liveness (`/health`), readiness (`/ready`),
//! service identity (`/`), and a static API descriptor (`/api/info`). No
//! state, no persistence; each response is assembled fresh per request.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;

//! HTTP adapter for voting-session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateSessionRequest, SessionResponse, TallyResponse};
pub use handlers::SessionHandlers;
pub use routes::session_routes;

//! Session lifecycle handlers: create, start, close, get.

mod close_session;
mod create_session;
mod get_session;
mod start_session;

pub use close_session::{CloseSessionCommand, CloseSessionHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use start_session::{StartSessionCommand, StartSessionHandler};

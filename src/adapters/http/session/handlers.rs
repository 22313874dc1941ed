//! HTTP handlers for voting-session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::application::handlers::session::{
    CloseSessionCommand, CloseSessionHandler, CreateSessionCommand, CreateSessionHandler,
    GetSessionHandler, GetSessionQuery, StartSessionCommand, StartSessionHandler,
};
use crate::application::handlers::tally::{GetTallyHandler, GetTallyQuery};
use crate::domain::foundation::{AgendaId, SessionId};
use crate::domain::session::SessionError;
use crate::domain::tally::TallyError;

use super::dto::{CreateSessionRequest, SessionResponse, TallyResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    start_handler: Arc<StartSessionHandler>,
    close_handler: Arc<CloseSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    tally_handler: Arc<GetTallyHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        start_handler: Arc<StartSessionHandler>,
        close_handler: Arc<CloseSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        tally_handler: Arc<GetTallyHandler>,
    ) -> Self {
        Self {
            create_handler,
            start_handler,
            close_handler,
            get_handler,
            tally_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/voting-sessions - Open a session for an agenda
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let agenda_id = match req.agenda_id.parse::<AgendaId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid agenda ID")),
            )
                .into_response()
        }
    };

    let cmd = CreateSessionCommand {
        agenda_id,
        duration_minutes: req.duration_minutes,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(session) => {
            (StatusCode::CREATED, Json(SessionResponse::from(&session))).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/v1/voting-sessions/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// PATCH /api/v1/voting-sessions/:id/start - Open the session for votes
pub async fn start_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .start_handler
        .handle(StartSessionCommand { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// PATCH /api/v1/voting-sessions/:id/close - Close the session early
pub async fn close_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .close_handler
        .handle(CloseSessionCommand { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/v1/voting-sessions/:id/result - Get the session's tally
pub async fn get_result(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.tally_handler.handle(GetTallyQuery { session_id }).await {
        Ok(tally) => (
            StatusCode::OK,
            Json(TallyResponse::from_tally(&session_id.to_string(), &tally)),
        )
            .into_response(),
        Err(e) => handle_tally_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn handle_session_error(error: SessionError) -> Response {
    error_response(error.code(), error.message())
}

fn handle_tally_error(error: TallyError) -> Response {
    error_response(error.code(), error.message())
}

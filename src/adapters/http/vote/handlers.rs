//! HTTP handlers for vote endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::application::handlers::vote::{
    CastVoteCommand, CastVoteHandler, HasVotedHandler, HasVotedQuery,
};
use crate::domain::foundation::{SessionId, VoterId};
use crate::domain::vote::VoteError;

use super::dto::{CastVoteRequest, HasVotedParams, HasVotedResponse, VoteResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct VoteHandlers {
    cast_handler: Arc<CastVoteHandler>,
    has_voted_handler: Arc<HasVotedHandler>,
}

impl VoteHandlers {
    pub fn new(cast_handler: Arc<CastVoteHandler>, has_voted_handler: Arc<HasVotedHandler>) -> Self {
        Self {
            cast_handler,
            has_voted_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/votes - Cast a vote in a session
pub async fn cast_vote(
    State(handlers): State<VoteHandlers>,
    Json(req): Json<CastVoteRequest>,
) -> Response {
    let (session_id, voter_id) = match parse_ids(&req.session_id, &req.voter_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = CastVoteCommand {
        session_id,
        voter_id,
        ballot: req.ballot,
    };

    match handlers.cast_handler.handle(cmd).await {
        Ok(vote) => (StatusCode::CREATED, Json(VoteResponse::from(&vote))).into_response(),
        Err(e) => handle_vote_error(e),
    }
}

/// GET /api/v1/votes/status - Check whether a voter has voted in a session
pub async fn has_voted(
    State(handlers): State<VoteHandlers>,
    Query(params): Query<HasVotedParams>,
) -> Response {
    let (session_id, voter_id) = match parse_ids(&params.session_id, &params.voter_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let query = HasVotedQuery {
        session_id,
        voter_id,
    };

    match handlers.has_voted_handler.handle(query).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(HasVotedResponse {
                session_id: session_id.to_string(),
                voter_id: voter_id.to_string(),
                has_voted: answer,
            }),
        )
            .into_response(),
        Err(e) => handle_vote_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_ids(session_id: &str, voter_id: &str) -> Result<(SessionId, VoterId), Response> {
    let session_id = session_id.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })?;

    let voter_id = voter_id.parse::<VoterId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid voter ID")),
        )
            .into_response()
    })?;

    Ok((session_id, voter_id))
}

fn handle_vote_error(error: VoteError) -> Response {
    error_response(error.code(), error.message())
}

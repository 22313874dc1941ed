//! HTTP DTOs for vote endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::vote::{Ballot, Vote};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to cast a vote in a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CastVoteRequest {
    pub session_id: String,
    pub voter_id: String,
    pub ballot: Ballot,
}

/// Query parameters for the has-voted lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct HasVotedParams {
    pub session_id: String,
    pub voter_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Recorded vote view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub id: String,
    pub session_id: String,
    pub voter_id: String,
    pub ballot: Ballot,
    pub cast_at: String,
}

impl From<&Vote> for VoteResponse {
    fn from(vote: &Vote) -> Self {
        Self {
            id: vote.id().to_string(),
            session_id: vote.session_id().to_string(),
            voter_id: vote.voter_id().to_string(),
            ballot: vote.ballot(),
            cast_at: vote.cast_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Answer to the has-voted lookup.
#[derive(Debug, Clone, Serialize)]
pub struct HasVotedResponse {
    pub session_id: String,
    pub voter_id: String,
    pub has_voted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionId, Timestamp, VoterId};
    use uuid::Uuid;

    #[test]
    fn cast_vote_request_deserializes_uppercase_ballot() {
        let json = r#"{
            "session_id": "8f14e45f-ceea-467f-a34f-d7b5c8f1a001",
            "voter_id": "8f14e45f-ceea-467f-a34f-d7b5c8f1a002",
            "ballot": "NO"
        }"#;
        let req: CastVoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ballot, Ballot::No);
    }

    #[test]
    fn cast_vote_request_rejects_unknown_ballot() {
        let json = r#"{
            "session_id": "8f14e45f-ceea-467f-a34f-d7b5c8f1a001",
            "voter_id": "8f14e45f-ceea-467f-a34f-d7b5c8f1a002",
            "ballot": "ABSTAIN"
        }"#;
        assert!(serde_json::from_str::<CastVoteRequest>(json).is_err());
    }

    #[test]
    fn vote_response_conversion() {
        let vote = Vote::new(
            SessionId::new(),
            VoterId::from_uuid(Uuid::new_v4()),
            Ballot::Yes,
            Timestamp::now(),
        );

        let response: VoteResponse = (&vote).into();
        assert_eq!(response.session_id, vote.session_id().to_string());
        assert_eq!(response.ballot, Ballot::Yes);
    }
}

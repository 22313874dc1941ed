//! CastVoteHandler - vote admission.
//!
//! Admission re-checks the deadline itself rather than trusting the stored
//! status: a vote can arrive in the window between the deadline passing and
//! the next sweep tick, while the session still reads as Active. The
//! deadline check runs first, so a late vote is rejected as expired even
//! when the sweep has already flipped the status to Closed.
//!
//! Uniqueness per (session, voter) is enforced by the ledger's atomic
//! insert; of two concurrent submissions for the same pair exactly one is
//! admitted and the other observes an already-voted error.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, SessionStatus, VoterId};
use crate::domain::vote::{Ballot, Vote, VoteError};
use crate::ports::{Clock, SessionStore, VoteLedger, VoterRegistry};

/// Command to cast a vote.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub session_id: SessionId,
    pub voter_id: VoterId,
    pub ballot: Ballot,
}

/// Handler admitting a single vote against a session.
pub struct CastVoteHandler {
    sessions: Arc<dyn SessionStore>,
    ledger: Arc<dyn VoteLedger>,
    voters: Arc<dyn VoterRegistry>,
    clock: Arc<dyn Clock>,
}

impl CastVoteHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        ledger: Arc<dyn VoteLedger>,
        voters: Arc<dyn VoterRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            ledger,
            voters,
            clock,
        }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<Vote, VoteError> {
        // 1. Load session
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await
            .map_err(|e| VoteError::infrastructure(e.to_string()))?
            .ok_or_else(|| VoteError::session_not_found(cmd.session_id))?;

        // 2. Deadline check, before the status check: expiration wins when
        //    both conditions hold, and a stale Active status must not admit
        //    a late vote.
        let now = self.clock.now();
        if session.is_expired(now) {
            return Err(VoteError::session_expired(cmd.session_id));
        }

        // 3. Only active sessions accept votes
        if session.status() != SessionStatus::Active {
            return Err(VoteError::session_not_active(format!(
                "session is {}",
                session.status()
            )));
        }

        // 4. Voter must be known and eligible (external registry)
        let eligible = self
            .voters
            .is_eligible(&cmd.voter_id)
            .await
            .map_err(|e| VoteError::infrastructure(e.to_string()))?;
        if !eligible {
            return Err(VoteError::voter_not_found(cmd.voter_id));
        }

        // 5. Atomic unique insert keyed by (session, voter)
        let vote = Vote::new(cmd.session_id, cmd.voter_id, cmd.ballot, now);
        let admitted = self
            .ledger
            .insert(&vote)
            .await
            .map_err(|e| VoteError::infrastructure(e.to_string()))?;
        if !admitted {
            return Err(VoteError::already_voted(cmd.session_id, cmd.voter_id));
        }

        Ok(vote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryDirectory, InMemorySessionStore, InMemoryVoteLedger};
    use crate::adapters::ManualClock;
    use crate::domain::foundation::{AgendaId, Timestamp};
    use crate::domain::session::VotingSession;
    use uuid::Uuid;

    struct Fixture {
        handler: Arc<CastVoteHandler>,
        store: Arc<InMemorySessionStore>,
        ledger: Arc<InMemoryVoteLedger>,
        directory: Arc<InMemoryDirectory>,
        clock: Arc<ManualClock>,
        session_id: SessionId,
    }

    /// One active 1-minute session starting at a fixed instant.
    async fn fixture() -> Fixture {
        let store = Arc::new(InMemorySessionStore::new());
        let ledger = Arc::new(InMemoryVoteLedger::new());
        let directory = Arc::new(InMemoryDirectory::new());
        let clock = Arc::new(ManualClock::starting_at(Timestamp::from_unix_secs(
            1_700_000_000,
        )));

        let mut session = VotingSession::new(
            SessionId::new(),
            AgendaId::from_uuid(Uuid::new_v4()),
            1,
            clock.now(),
        )
        .unwrap();
        session.start(clock.now()).unwrap();
        let session_id = *session.id();
        store.insert(&session).await.unwrap();

        let handler = Arc::new(CastVoteHandler::new(
            store.clone(),
            ledger.clone(),
            directory.clone(),
            clock.clone(),
        ));

        Fixture {
            handler,
            store,
            ledger,
            directory,
            clock,
            session_id,
        }
    }

    async fn eligible_voter(f: &Fixture) -> VoterId {
        let voter = VoterId::from_uuid(Uuid::new_v4());
        f.directory.add_voter(voter).await;
        voter
    }

    #[tokio::test]
    async fn admits_vote_in_active_session() {
        let f = fixture().await;
        let voter = eligible_voter(&f).await;

        let vote = f
            .handler
            .handle(CastVoteCommand {
                session_id: f.session_id,
                voter_id: voter,
                ballot: Ballot::Yes,
            })
            .await
            .unwrap();

        assert_eq!(vote.ballot(), Ballot::Yes);
        assert_eq!(vote.cast_at(), &f.clock.now());
        assert!(f.ledger.has_voted(&f.session_id, &voter).await.unwrap());
    }

    #[tokio::test]
    async fn second_vote_by_same_voter_is_rejected() {
        let f = fixture().await;
        let voter = eligible_voter(&f).await;

        f.handler
            .handle(CastVoteCommand {
                session_id: f.session_id,
                voter_id: voter,
                ballot: Ballot::Yes,
            })
            .await
            .unwrap();

        let second = f
            .handler
            .handle(CastVoteCommand {
                session_id: f.session_id,
                voter_id: voter,
                ballot: Ballot::No,
            })
            .await;

        assert!(matches!(second, Err(VoteError::AlreadyVoted { .. })));
        assert_eq!(f.ledger.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_votes_for_same_pair_admit_exactly_one() {
        let f = fixture().await;
        let voter = eligible_voter(&f).await;

        let mut handles = Vec::new();
        for i in 0..12 {
            let handler = f.handler.clone();
            let session_id = f.session_id;
            let ballot = if i % 2 == 0 { Ballot::Yes } else { Ballot::No };
            handles.push(tokio::spawn(async move {
                handler
                    .handle(CastVoteCommand {
                        session_id,
                        voter_id: voter,
                        ballot,
                    })
                    .await
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => admitted += 1,
                Err(VoteError::AlreadyVoted { .. }) => {}
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(f.ledger.len().await, 1);
    }

    #[tokio::test]
    async fn vote_on_unknown_session_is_not_found() {
        let f = fixture().await;
        let voter = eligible_voter(&f).await;
        let missing = SessionId::new();

        let result = f
            .handler
            .handle(CastVoteCommand {
                session_id: missing,
                voter_id: voter,
                ballot: Ballot::Yes,
            })
            .await;

        assert_eq!(result, Err(VoteError::SessionNotFound(missing)));
    }

    #[tokio::test]
    async fn vote_on_pending_session_is_not_active() {
        let f = fixture().await;
        let voter = eligible_voter(&f).await;

        let pending = VotingSession::new(
            SessionId::new(),
            AgendaId::from_uuid(Uuid::new_v4()),
            1,
            f.clock.now(),
        )
        .unwrap();
        f.store.insert(&pending).await.unwrap();

        let result = f
            .handler
            .handle(CastVoteCommand {
                session_id: *pending.id(),
                voter_id: voter,
                ballot: Ballot::Yes,
            })
            .await;

        assert!(matches!(result, Err(VoteError::SessionNotActive(_))));
    }

    #[tokio::test]
    async fn past_deadline_vote_is_expired_even_under_stale_active_status() {
        let f = fixture().await;
        let voter = eligible_voter(&f).await;

        // Deadline passes; no sweep has run, the stored status is still Active.
        f.clock.advance_minutes(2);

        let result = f
            .handler
            .handle(CastVoteCommand {
                session_id: f.session_id,
                voter_id: voter,
                ballot: Ballot::Yes,
            })
            .await;

        assert_eq!(result, Err(VoteError::SessionExpired(f.session_id)));
        assert!(f.ledger.is_empty().await);
    }

    #[tokio::test]
    async fn expired_takes_precedence_over_closed_status() {
        let f = fixture().await;
        let voter = eligible_voter(&f).await;

        // Close the session after its deadline, as the sweep would.
        f.clock.advance_minutes(2);
        let mut closed = f.store.find_by_id(&f.session_id).await.unwrap().unwrap();
        closed.close().unwrap();
        f.store
            .transition(&closed, SessionStatus::Active)
            .await
            .unwrap();

        let result = f
            .handler
            .handle(CastVoteCommand {
                session_id: f.session_id,
                voter_id: voter,
                ballot: Ballot::Yes,
            })
            .await;

        // Both "closed" and "expired" hold; expired is the reported outcome.
        assert_eq!(result, Err(VoteError::SessionExpired(f.session_id)));
    }

    #[tokio::test]
    async fn ineligible_voter_is_rejected() {
        let f = fixture().await;
        let voter = VoterId::from_uuid(Uuid::new_v4());
        f.directory.add_voter(voter).await;
        f.directory.deactivate_voter(&voter).await;

        let result = f
            .handler
            .handle(CastVoteCommand {
                session_id: f.session_id,
                voter_id: voter,
                ballot: Ballot::Yes,
            })
            .await;

        assert_eq!(result, Err(VoteError::VoterNotFound(voter)));
        assert!(f.ledger.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_voter_is_rejected() {
        let f = fixture().await;
        let voter = VoterId::from_uuid(Uuid::new_v4());

        let result = f
            .handler
            .handle(CastVoteCommand {
                session_id: f.session_id,
                voter_id: voter,
                ballot: Ballot::No,
            })
            .await;

        assert_eq!(result, Err(VoteError::VoterNotFound(voter)));
    }
}

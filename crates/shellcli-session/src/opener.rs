//! Session-opening collaborator contract

use crate::{SessionDescriptor, SessionError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Span;

/// Opens a session from an ordered candidate list and switches it into a mode
///
/// Implementors own the connection pool, the attempt loop and the mode state
/// machine. Candidates arrive in attempt order: the first descriptor that
/// yields a session wins. `M` is the caller's operating-mode token and is
/// passed through untouched.
#[async_trait]
pub trait SessionOpener<M>: Send + Sync
where
    M: Send + 'static,
{
    /// Scoped, mode-bound session handle returned to the caller
    type Handle: Send;

    /// Open a session in `mode`, logging under `span`
    async fn get_session(
        &self,
        sessions: Vec<SessionDescriptor>,
        mode: M,
        span: &Span,
    ) -> Result<Self::Handle, SessionError>;
}

#[async_trait]
impl<M, O> SessionOpener<M> for Arc<O>
where
    M: Send + 'static,
    O: SessionOpener<M> + ?Sized,
{
    type Handle = O::Handle;

    async fn get_session(
        &self,
        sessions: Vec<SessionDescriptor>,
        mode: M,
        span: &Span,
    ) -> Result<Self::Handle, SessionError> {
        (**self).get_session(sessions, mode, span).await
    }
}

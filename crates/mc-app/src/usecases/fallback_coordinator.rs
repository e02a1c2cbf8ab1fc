//! Owner of the clipboard fallback state.
//!
//! Wraps the pure [`FallbackStateMachine`] with the bookkeeping needed for
//! asynchronous clipboard calls: every call takes a [`FallbackTicket`] before
//! it suspends, and a failure that comes back after a dismissal or after a
//! newer failure is discarded instead of reopening the modal.

use std::sync::{Mutex, PoisonError};

use mc_core::fallback::{
    FallbackAction, FallbackEvent, FallbackReason, FallbackState, FallbackStateMachine,
};
use tokio::sync::watch;
use tracing::{debug, info};

/// Issued to each clipboard call before it suspends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FallbackTicket(u64);

#[derive(Default)]
struct CoordinatorInner {
    state: FallbackState,
    issued: u64,
    dismissed_at: u64,
    last_failure: u64,
}

impl CoordinatorInner {
    fn is_stale(&self, ticket: FallbackTicket) -> bool {
        ticket.0 <= self.dismissed_at || ticket.0 < self.last_failure
    }
}

pub struct FallbackCoordinator {
    inner: Mutex<CoordinatorInner>,
    state_tx: watch::Sender<FallbackState>,
    /// Highest ticket covered by a dismissal.
    dismissed_tx: watch::Sender<u64>,
}

impl Default for FallbackCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackCoordinator {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(FallbackState::Inactive);
        let (dismissed_tx, _) = watch::channel(0);
        Self {
            inner: Mutex::new(CoordinatorInner::default()),
            state_tx,
            dismissed_tx,
        }
    }

    pub fn issue_ticket(&self) -> FallbackTicket {
        let mut inner = self.lock();
        inner.issued += 1;
        FallbackTicket(inner.issued)
    }

    /// Whether a result produced under `ticket` must be discarded.
    pub fn is_stale(&self, ticket: FallbackTicket) -> bool {
        self.lock().is_stale(ticket)
    }

    pub fn write_failed(
        &self,
        ticket: FallbackTicket,
        text: String,
        reason: FallbackReason,
    ) -> Vec<FallbackAction> {
        self.failed(ticket, FallbackEvent::WriteFailed { text, reason })
    }

    pub fn read_failed(&self, ticket: FallbackTicket, reason: FallbackReason) -> Vec<FallbackAction> {
        self.failed(ticket, FallbackEvent::ReadFailed { reason })
    }

    /// A native write completed; closes a pending manual copy unless the
    /// result is stale.
    pub fn write_succeeded(&self, ticket: FallbackTicket) -> Vec<FallbackAction> {
        let mut inner = self.lock();
        if inner.is_stale(ticket) {
            debug!(?ticket, "ignoring stale clipboard write success");
            return Vec::new();
        }
        self.apply(&mut inner, FallbackEvent::WriteSucceeded)
    }

    pub fn submit_manual_text(&self, text: String) -> Vec<FallbackAction> {
        let mut inner = self.lock();
        self.apply(&mut inner, FallbackEvent::ManualTextSubmitted { text })
    }

    /// Cancel the pending interaction. In-flight calls become stale.
    pub fn dismiss(&self) -> Vec<FallbackAction> {
        let mut inner = self.lock();
        inner.dismissed_at = inner.issued;
        self.dismissed_tx.send_replace(inner.dismissed_at);
        self.apply(&mut inner, FallbackEvent::Dismissed)
    }

    /// Resolves once a dismissal covers `ticket`.
    ///
    /// Race an in-flight clipboard call against this to stop awaiting it
    /// when the user cancels.
    pub async fn dismissed(&self, ticket: FallbackTicket) {
        let mut rx = self.dismissed_tx.subscribe();
        if rx.wait_for(|&dismissed_at| ticket.0 <= dismissed_at).await.is_err() {
            // sender lives as long as self; never resolve on a closed channel
            std::future::pending::<()>().await;
        }
    }

    pub fn ingest_finished(&self) -> Vec<FallbackAction> {
        let mut inner = self.lock();
        self.apply(&mut inner, FallbackEvent::IngestFinished)
    }

    pub fn state(&self) -> FallbackState {
        self.lock().state.clone()
    }

    /// Watch state changes, e.g. to open and close the modal.
    pub fn subscribe(&self) -> watch::Receiver<FallbackState> {
        self.state_tx.subscribe()
    }

    fn failed(&self, ticket: FallbackTicket, event: FallbackEvent) -> Vec<FallbackAction> {
        let mut inner = self.lock();
        if inner.is_stale(ticket) {
            debug!(?ticket, "discarding stale clipboard failure");
            return Vec::new();
        }
        inner.last_failure = ticket.0;
        self.apply(&mut inner, event)
    }

    fn apply(&self, inner: &mut CoordinatorInner, event: FallbackEvent) -> Vec<FallbackAction> {
        let from = inner.state.mode();
        let event_name = format!("{:?}", event);
        let current = std::mem::take(&mut inner.state);
        let (next, actions) = FallbackStateMachine::transition(current, event);
        if !actions.is_empty() {
            info!(from = ?from, to = ?next.mode(), event = %event_name, "fallback state transition");
        }
        inner.state = next.clone();
        self.state_tx.send_if_modified(|published| {
            if *published == next {
                return false;
            }
            *published = next;
            true
        });
        actions
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CoordinatorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::fallback::FallbackMode;
    use std::time::Duration;
    use tokio::time::timeout;

    #[test]
    fn write_failure_keeps_text_for_manual_copy() {
        let coordinator = FallbackCoordinator::new();
        let ticket = coordinator.issue_ticket();
        let actions = coordinator.write_failed(ticket, "CCO".into(), FallbackReason::Unsupported);

        assert_eq!(actions, vec![FallbackAction::PresentCopyField { text: "CCO".into() }]);
        assert_eq!(coordinator.state().pending_text(), Some("CCO"));
    }

    #[test]
    fn failure_after_dismiss_is_discarded() {
        let coordinator = FallbackCoordinator::new();
        let in_flight = coordinator.issue_ticket();
        coordinator.dismiss();

        let actions = coordinator.read_failed(in_flight, FallbackReason::Unsupported);
        assert!(actions.is_empty());
        assert_eq!(coordinator.state(), FallbackState::Inactive);
        assert!(coordinator.is_stale(in_flight));
    }

    #[test]
    fn older_failure_does_not_override_newer_one() {
        let coordinator = FallbackCoordinator::new();
        let older = coordinator.issue_ticket();
        let newer = coordinator.issue_ticket();

        coordinator.write_failed(newer, "newer".into(), FallbackReason::Unsupported);
        let actions = coordinator.write_failed(older, "older".into(), FallbackReason::Unsupported);

        assert!(actions.is_empty());
        assert_eq!(coordinator.state().pending_text(), Some("newer"));
    }

    #[test]
    fn newer_failure_replaces_pending_state() {
        let coordinator = FallbackCoordinator::new();
        let first = coordinator.issue_ticket();
        coordinator.write_failed(first, "first".into(), FallbackReason::Unsupported);
        let second = coordinator.issue_ticket();
        coordinator.read_failed(second, FallbackReason::Denied("blocked".into()));

        assert_eq!(coordinator.state().mode(), FallbackMode::AwaitingRead);
    }

    #[test]
    fn fresh_ticket_after_dismiss_is_accepted() {
        let coordinator = FallbackCoordinator::new();
        coordinator.issue_ticket();
        coordinator.dismiss();
        let fresh = coordinator.issue_ticket();

        assert!(!coordinator.is_stale(fresh));
        coordinator.read_failed(fresh, FallbackReason::Unsupported);
        assert_eq!(coordinator.state().mode(), FallbackMode::AwaitingRead);
    }

    #[test]
    fn write_success_closes_pending_copy() {
        let coordinator = FallbackCoordinator::new();
        let failed = coordinator.issue_ticket();
        coordinator.write_failed(failed, "CCO".into(), FallbackReason::Denied("x".into()));

        let retry = coordinator.issue_ticket();
        let actions = coordinator.write_succeeded(retry);

        assert_eq!(actions, vec![FallbackAction::CloseModal]);
        assert_eq!(coordinator.state(), FallbackState::Inactive);
    }

    #[test]
    fn stale_write_success_keeps_newer_failure() {
        let coordinator = FallbackCoordinator::new();
        let older = coordinator.issue_ticket();
        let newer = coordinator.issue_ticket();
        coordinator.write_failed(newer, "newer".into(), FallbackReason::Unsupported);

        assert!(coordinator.write_succeeded(older).is_empty());
        assert_eq!(coordinator.state().pending_text(), Some("newer"));
    }

    #[tokio::test]
    async fn dismissal_wakes_waiters_for_earlier_tickets_only() {
        let short = Duration::from_millis(20);
        let coordinator = FallbackCoordinator::new();
        let in_flight = coordinator.issue_ticket();

        assert!(timeout(short, coordinator.dismissed(in_flight)).await.is_err());

        coordinator.dismiss();
        timeout(Duration::from_secs(1), coordinator.dismissed(in_flight))
            .await
            .expect("dismissal should release the in-flight ticket");

        let later = coordinator.issue_ticket();
        assert!(timeout(short, coordinator.dismissed(later)).await.is_err());
    }

    #[test]
    fn unchanged_state_is_not_republished() {
        let coordinator = FallbackCoordinator::new();
        let rx = coordinator.subscribe();

        let ticket = coordinator.issue_ticket();
        coordinator.write_succeeded(ticket);

        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscribers_observe_transitions() {
        let coordinator = FallbackCoordinator::new();
        let mut rx = coordinator.subscribe();

        let ticket = coordinator.issue_ticket();
        coordinator.read_failed(ticket, FallbackReason::Unsupported);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().mode(), FallbackMode::AwaitingRead);

        coordinator.dismiss();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), FallbackState::Inactive);
    }
}

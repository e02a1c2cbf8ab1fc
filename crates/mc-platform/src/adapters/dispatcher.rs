use mc_core::{ports::DispatchPort, HostAction};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Forwards host actions over an unbounded channel to whatever owns the
/// molecule store.
#[derive(Clone)]
pub struct ChannelDispatcher {
    tx: mpsc::UnboundedSender<HostAction>,
}

impl ChannelDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<HostAction>) -> Self {
        Self { tx }
    }

    /// Create a dispatcher together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HostAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl DispatchPort for ChannelDispatcher {
    fn dispatch(&self, action: HostAction) {
        let kind = action.kind();
        match self.tx.send(action) {
            Ok(()) => debug!(action = kind, "host action dispatched"),
            Err(_) => warn!(action = kind, "host store receiver dropped, action lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::MoleculeId;

    #[tokio::test]
    async fn dispatched_actions_arrive_in_order() {
        let (dispatcher, mut rx) = ChannelDispatcher::channel();

        dispatcher.dispatch(HostAction::ToggleMoleculeAtomNumber {
            id: MoleculeId::from("a"),
        });
        dispatcher.dispatch(HostAction::DeleteMolecule {
            id: MoleculeId::from("b"),
        });

        assert_eq!(rx.recv().await.map(|a| a.kind()), Some("TOGGLE_MOLECULE_ATOM_NUMBER"));
        assert_eq!(rx.recv().await.map(|a| a.kind()), Some("DELETE_MOLECULE"));
    }

    #[test]
    fn dispatch_after_receiver_dropped_does_not_panic() {
        let (dispatcher, rx) = ChannelDispatcher::channel();
        drop(rx);
        dispatcher.dispatch(HostAction::DeleteMolecule {
            id: MoleculeId::from("gone"),
        });
    }
}

use crate::action::HostAction;

/// Channel to the host store. Fire-and-forget.
pub trait DispatchPort: Send + Sync {
    fn dispatch(&self, action: HostAction);
}

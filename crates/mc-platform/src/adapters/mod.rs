//! Host-facing adapters: the store channel and the notification sink.

mod dispatcher;
mod notifier;

pub use dispatcher::ChannelDispatcher;
pub use notifier::TracingNotifier;

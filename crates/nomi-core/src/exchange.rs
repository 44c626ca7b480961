//! MessageExchange trait definition.

use nomi_types::error::ExchangeError;
use nomi_types::nomi::ConversationTarget;

/// One request/response round trip carrying a single user message.
///
/// Implementations perform no retries. Every failure is reported as an
/// [`ExchangeError`] and the caller decides what to do with it (the session
/// driver prints it and moves on to the next input line).
///
/// Implementations live in nomi-infra (e.g., `NomiClient`).
pub trait MessageExchange: Send + Sync {
    /// Send `text` to `target` and return the reply text.
    fn send(
        &self,
        target: &ConversationTarget,
        text: &str,
    ) -> impl std::future::Future<Output = Result<String, ExchangeError>> + Send;
}

impl<E: MessageExchange + ?Sized> MessageExchange for &E {
    fn send(
        &self,
        target: &ConversationTarget,
        text: &str,
    ) -> impl std::future::Future<Output = Result<String, ExchangeError>> + Send {
        (**self).send(target, text)
    }
}

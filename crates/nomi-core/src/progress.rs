//! ProgressIndicator trait definition.

/// A cancellable "waiting" indicator shown while an exchange is in flight.
///
/// The contract the session driver relies on:
/// - `start` begins drawing in the background and returns immediately.
/// - `stop` consumes the handle and returns only once the indicator's output
///   has been erased from the current line, so the next write starts at
///   column zero.
///
/// Indicators cannot fail.
pub trait ProgressIndicator {
    /// Token for one running indicator. Consumed by [`ProgressIndicator::stop`].
    type Handle;

    fn start(&self) -> Self::Handle;

    fn stop(&self, handle: Self::Handle);
}

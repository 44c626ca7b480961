//! Identity resolution: display name to conversation target.

use nomi_types::error::ResolveError;
use nomi_types::nomi::{ConversationTarget, NomiListing};

/// Resolves a human-supplied name to the target the session talks to.
///
/// Called exactly once before a session starts. Any error is fatal to the
/// session: no input loop is entered.
pub trait IdentityResolver: Send + Sync {
    fn resolve(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<ConversationTarget, ResolveError>> + Send;
}

/// Find the first listing entry whose name matches `name` case-insensitively.
pub fn find_by_name(listing: &NomiListing, name: &str) -> Result<ConversationTarget, ResolveError> {
    let wanted = name.to_lowercase();
    listing
        .nomis
        .iter()
        .find(|nomi| nomi.name.to_lowercase() == wanted)
        .map(ConversationTarget::from)
        .ok_or_else(|| ResolveError::NotFound {
            name: name.to_string(),
        })
}

//! Display-name resolution for actor identifiers.

use crate::model::{ActorId, UserProfile};

/// Label used when no actor is attached to a record (system actions).
pub const SYSTEM_ACTOR_LABEL: &str = "System";

/// Characters of the id shown when no profile name is available.
const ID_PREFIX_LEN: usize = 8;

/// Resolve an optional actor id to a human label.
///
/// Fallback chain: absent id -> "System"; directory hit with a non-empty
/// profile name -> that name; otherwise the first 8 characters of the id's
/// canonical text followed by "...". Pure lookup over the caller-supplied
/// directory snapshot.
pub fn user_display_name(actor: Option<&ActorId>, directory: &[(ActorId, UserProfile)]) -> String {
    let Some(actor) = actor else {
        return SYSTEM_ACTOR_LABEL.to_string();
    };

    let profile = directory
        .iter()
        .find(|(id, _)| id == actor)
        .map(|(_, profile)| profile);

    match profile {
        Some(p) if !p.name.is_empty() => p.name.clone(),
        _ => format!("{}...", actor.prefix(ID_PREFIX_LEN)),
    }
}

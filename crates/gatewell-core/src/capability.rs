//! Interaction capability seams.
//!
//! World objects expose what they can do through small capability traits:
//! [`Hoverable`] for status text and [`Interactable`] for use/item entry
//! points. Hosts without trait dispatch can register the same surface as
//! capability tags; the contracts stay identical.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::access::AccessControl;
use crate::actor::ActorId;

/// Identifier for an inventory item offered to an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new `ItemId` from a name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Returns the item name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collaborators available to an interaction entry point.
pub struct InteractContext<'a> {
    /// Permission check for the interacting actor's target position.
    pub access: &'a dyn AccessControl,
}

impl fmt::Debug for InteractContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractContext").finish_non_exhaustive()
    }
}

/// Capability: the object shows status text when looked at.
pub trait Hoverable {
    /// Returns the localized status text, or an empty string while the
    /// object's replicated state is not yet valid.
    fn hover_text(&self) -> String;

    /// Returns the localized display name.
    fn hover_name(&self) -> String;
}

/// Capability: the object responds to the use key and offered items.
pub trait Interactable {
    /// Discrete or hold-style activation by `actor`.
    ///
    /// Returns true if the interaction was handled (including silently
    /// rejected ones); false hands the input back to the host.
    fn interact(&mut self, actor: ActorId, hold: bool, ctx: &InteractContext<'_>) -> bool;

    /// Offers an inventory item to the object.
    ///
    /// Returns true if the item was consumed or the offer was handled.
    fn use_item(&mut self, actor: ActorId, item: &ItemId, ctx: &InteractContext<'_>) -> bool;
}

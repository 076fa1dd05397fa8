use serde::Serialize;
use ww_core::{Identity, Property};

/// Outcome of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registered {
    pub identity: Identity,
    pub property: Option<Property>,
}

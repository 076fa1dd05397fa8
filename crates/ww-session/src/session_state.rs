use ww_core::{Identity, Property};

/// Lifecycle of a [`SessionStore`](crate::SessionStore).
///
/// `Initializing` is left exactly once, and never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Constructed, restore not started
    Uninitialized,
    /// Restoring the persisted session
    Initializing,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Restore {
    Pending,
    Running,
    Done,
}

/// Snapshot of the current session.
///
/// Only the store builds or changes it, which keeps two invariants: a
/// property is present only together with an identity, and that property is
/// owned by that identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    identity: Option<Identity>,
    property: Option<Property>,
    restore: Restore,
    /// Bumped on every identity/property transition
    revision: u64,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self {
            identity: None,
            property: None,
            restore: Restore::Pending,
            revision: 0,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn property(&self) -> Option<&Property> {
        self.property.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// True until the persisted session has been restored (or found absent).
    pub fn is_initializing(&self) -> bool {
        self.restore != Restore::Done
    }

    pub fn phase(&self) -> SessionPhase {
        match self.restore {
            Restore::Pending => SessionPhase::Uninitialized,
            Restore::Running => SessionPhase::Initializing,
            Restore::Done if self.is_authenticated() => SessionPhase::Authenticated,
            Restore::Done => SessionPhase::Unauthenticated,
        }
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn begin_restore(&mut self) {
        self.restore = Restore::Running;
    }

    pub(crate) fn finish_restore(&mut self) {
        self.restore = Restore::Done;
    }

    /// Replaces the identity. The property survives only if it belongs to the
    /// new identity.
    pub(crate) fn set_identity(&mut self, identity: Identity) {
        if self
            .property
            .as_ref()
            .is_some_and(|property| !property.is_owned_by(&identity.id))
        {
            self.property = None;
        }
        self.identity = Some(identity);
        self.revision += 1;
    }

    /// Attaches a property owned by the current identity. Returns false and
    /// leaves the state untouched otherwise.
    pub(crate) fn set_property(&mut self, property: Property) -> bool {
        let owned = self
            .identity
            .as_ref()
            .is_some_and(|identity| property.is_owned_by(&identity.id));

        if owned {
            self.property = Some(property);
            self.revision += 1;
        }
        owned
    }

    pub(crate) fn clear(&mut self) {
        self.identity = None;
        self.property = None;
        self.revision += 1;
    }
}

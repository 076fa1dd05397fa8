use crate::{Credential, Registration};

/// Fields the authentication provider needs to create an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub display_name: String,
    pub credential: Credential,
    pub phone: Option<String>,
}

impl From<&Registration> for NewIdentity {
    fn from(registration: &Registration) -> Self {
        Self {
            display_name: registration.display_name.trim().to_string(),
            credential: Credential::new(&registration.email, &registration.password),
            phone: registration.phone.clone(),
        }
    }
}

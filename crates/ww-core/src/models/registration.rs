use crate::PropertyDraft;

/// Everything collected by the sign-up flow.
#[derive(Clone, PartialEq)]
pub struct Registration {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    /// Present when the user registered a property together with the account
    pub property: Option<PropertyDraft>,
}

impl Registration {
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            password: password.into(),
            phone: None,
            property: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDraft) -> Self {
        self.property = Some(property);
        self
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .field("property", &self.property)
            .finish()
    }
}

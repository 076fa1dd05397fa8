use clap::{Args, Subcommand};
use ww_core::{Address, IdentityPatch, PropertyDraft};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account, optionally with its property
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation (defaults to --password)
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[command(flatten)]
        property: RegisterPropertyArgs,
    },

    /// Create the property of the signed-in account
    AddProperty {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        location: PropertyLocationArgs,
    },

    /// Update the signed-in account's profile
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PropertyLocationArgs {
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    /// Total area in hectares
    #[arg(long)]
    pub area: Option<f64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RegisterPropertyArgs {
    /// Registers a property together with the account
    #[arg(long)]
    pub property_name: Option<String>,
    #[command(flatten)]
    pub location: PropertyLocationArgs,
}

impl Commands {
    /// Whether the command calls the identity provider.
    pub fn uses_identity_provider(&self) -> bool {
        matches!(self, Self::Login { .. } | Self::Register { .. })
    }
}

impl PropertyLocationArgs {
    pub fn into_draft(self, name: String) -> PropertyDraft {
        let address = Address {
            street: self.street.unwrap_or_default(),
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
        };
        PropertyDraft::new(name, address, self.area)
    }
}

impl RegisterPropertyArgs {
    /// `None` when no property name was given.
    pub fn into_draft(self) -> Option<PropertyDraft> {
        let name = self.property_name?;
        Some(self.location.into_draft(name))
    }
}

pub fn profile_patch(
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> IdentityPatch {
    IdentityPatch {
        display_name: name,
        email,
        phone,
        status: None,
    }
}

use crate::commands::{Commands, profile_patch};
use crate::{Cli, CliResult, logger};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use serde_json::{Value, json};
use ww_client::{FirebaseAuthClient, FirebaseEndpoints, PropertyClient};
use ww_config::Config;
use ww_core::{Credential, Registration, RegistrationValidator};
use ww_session::{FileStorage, SessionState, SessionStore};

/// Loads configuration, sets up logging, restores the session and runs the
/// command. Returns the JSON to print.
pub async fn run(cli: Cli) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    if cli.command.uses_identity_provider() {
        config.auth.require_api_key()?;
    }

    let store = build_store(&config)?;
    store.initialize().await;

    execute(&store, cli.command).await
}

fn build_store(config: &Config) -> CliResult<SessionStore> {
    let timeout = Duration::from_secs(config.api.timeout_secs);

    // Commands that stay local (whoami, logout) work without an API key.
    let api_key = config.auth.api_key.clone().unwrap_or_default();
    let endpoints = FirebaseEndpoints::new(
        api_key,
        &config.auth.identity_base_url,
        &config.auth.token_base_url,
    );
    let auth = Arc::new(FirebaseAuthClient::new(endpoints, timeout)?);
    let properties =
        PropertyClient::new(&config.api.base_url, timeout)?.with_auth(auth.clone());

    let storage_dir = config.storage_path()?;
    debug!("Session storage at {}", storage_dir.display());

    Ok(SessionStore::new(
        auth,
        Arc::new(properties),
        Arc::new(FileStorage::new(storage_dir)),
    ))
}

/// Runs one command against an initialized store.
pub(crate) async fn execute(store: &SessionStore, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let identity = store.sign_in(&Credential::new(email, password)).await?;
            Ok(json!({ "identity": identity }))
        }

        Commands::Register {
            name,
            email,
            password,
            confirm_password,
            phone,
            property,
        } => {
            let confirm = confirm_password.unwrap_or_else(|| password.clone());
            let mut registration = Registration::new(name, email, password);
            if let Some(phone) = phone {
                registration = registration.with_phone(phone);
            }
            if let Some(draft) = property.into_draft() {
                registration = registration.with_property(draft);
            }
            RegistrationValidator::validate(&registration, &confirm)?;

            let registered = store.sign_up(&registration).await?;
            info!("Account {} registered", registered.identity.id);
            Ok(json!(registered))
        }

        Commands::AddProperty { name, location } => {
            let draft = location.into_draft(name);
            RegistrationValidator::validate_property(&draft)?;

            let property = store.create_resource(&draft).await?;
            Ok(json!({ "property": property }))
        }

        Commands::UpdateProfile { name, email, phone } => {
            if let Some(email) = &email {
                RegistrationValidator::validate_email(email)?;
            }
            if let Some(phone) = &phone {
                RegistrationValidator::validate_phone(phone)?;
            }

            let identity = store
                .update_identity(&profile_patch(name, email, phone))
                .await?;
            Ok(json!({ "identity": identity }))
        }

        Commands::Logout => {
            store.logout().await;
            Ok(session_json(&store.state()))
        }

        Commands::Whoami => Ok(session_json(&store.state())),
    }
}

pub(crate) fn session_json(state: &SessionState) -> Value {
    json!({
        "authenticated": state.is_authenticated(),
        "identity": state.identity(),
        "property": state.property(),
    })
}

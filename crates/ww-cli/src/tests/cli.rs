use crate::{Cli, Commands};

use clap::Parser;

#[test]
fn given_login_args_when_parsed_then_login_command() {
    let cli = Cli::try_parse_from([
        "waterwise",
        "login",
        "--email",
        "ana@x.com",
        "--password",
        "abcdef1",
    ])
    .unwrap();

    assert!(!cli.pretty);
    match cli.command {
        Commands::Login { email, password } => {
            assert_eq!(email, "ana@x.com");
            assert_eq!(password, "abcdef1");
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn given_register_with_property_when_parsed_then_draft_built() {
    let cli = Cli::try_parse_from([
        "waterwise",
        "register",
        "--name",
        "Ana",
        "--email",
        "ana@x.com",
        "--password",
        "abcdef1",
        "--property-name",
        "Fazenda X",
        "--street",
        "Estrada 1",
        "--area",
        "10",
        "--pretty",
    ])
    .unwrap();

    assert!(cli.pretty);
    let Commands::Register { property, .. } = cli.command else {
        panic!("expected register");
    };
    let draft = property.into_draft().unwrap();
    assert_eq!(draft.name, "Fazenda X");
    assert_eq!(draft.address.street, "Estrada 1");
    assert_eq!(draft.area_ha, Some(10.0));
}

#[test]
fn given_register_without_property_name_when_parsed_then_no_draft() {
    let cli = Cli::try_parse_from([
        "waterwise",
        "register",
        "--name",
        "Ana",
        "--email",
        "ana@x.com",
        "--password",
        "abcdef1",
    ])
    .unwrap();

    let Commands::Register { property, .. } = cli.command else {
        panic!("expected register");
    };
    assert!(property.into_draft().is_none());
}

#[test]
fn given_login_without_password_when_parsed_then_error() {
    let result = Cli::try_parse_from(["waterwise", "login", "--email", "ana@x.com"]);
    assert!(result.is_err());
}

#[test]
fn given_non_numeric_area_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "waterwise",
        "add-property",
        "--name",
        "Fazenda X",
        "--area",
        "big",
    ]);
    assert!(result.is_err());
}

#[test]
fn given_commands_when_uses_identity_provider_then_only_login_and_register() {
    let parse = |args: &[&str]| Cli::try_parse_from(args.iter().copied()).unwrap().command;

    let login = parse(&["waterwise", "login", "--email", "a@x.com", "--password", "p"]);
    assert!(login.uses_identity_provider());
    assert!(!parse(&["waterwise", "whoami"]).uses_identity_provider());
    assert!(!parse(&["waterwise", "logout"]).uses_identity_provider());
    assert!(!parse(&["waterwise", "update-profile", "--name", "Ana"]).uses_identity_provider());
}

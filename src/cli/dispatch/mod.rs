//! Command-line argument dispatch.
//!
//! This module maps validated CLI arguments to the configuration state and
//! the account action to run.

use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;

fn callsign(sub: &clap::ArgMatches) -> Result<String> {
    sub.get_one::<String>("callsign")
        .cloned()
        .context("missing required argument: --callsign")
}

/// Map validated CLI matches to an account action plus global configuration.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let backend_url = matches
        .get_one::<String>("backend-url")
        .cloned()
        .context("missing required argument: --backend-url")?;

    let anon_key = matches.get_one::<String>("anon-key").cloned();

    let service_key = matches
        .get_one::<String>("service-key")
        .cloned()
        .map(SecretString::from)
        .context("missing required argument: --service-key")?;

    let globals = GlobalArgs::new(backend_url, anon_key, service_key);

    let action = match matches.subcommand() {
        Some(("create", sub)) => Action::Create {
            callsign: callsign(sub)?,
            full_name: sub.get_one::<String>("full-name").cloned(),
        },
        Some(("show", sub)) => Action::Show {
            callsign: callsign(sub)?,
        },
        Some(("update", sub)) => Action::Update {
            callsign: callsign(sub)?,
            full_name: sub
                .get_one::<String>("full-name")
                .cloned()
                .context("missing required argument: --full-name")?,
        },
        Some(("delete", sub)) => Action::Delete {
            callsign: callsign(sub)?,
        },
        _ => return Err(anyhow!("missing subcommand")),
    };

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn create_action_with_globals() {
        temp_env::with_vars(
            [
                ("LOGBOOK_BACKEND_URL", Some("https://auth.logbook.internal")),
                ("LOGBOOK_SERVICE_KEY", Some("secret")),
                ("LOGBOOK_ANON_KEY", None::<&str>),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec![
                    "logbook-identity",
                    "create",
                    "--callsign",
                    "AB123",
                    "--full-name",
                    "Ada Bravo",
                ]);
                let (action, globals) = handler(&matches).expect("handler should succeed");

                assert_eq!(globals.backend_url, "https://auth.logbook.internal");
                assert_eq!(globals.anon_key, None);
                assert_eq!(globals.service_key.expose_secret(), "secret");

                match action {
                    Action::Create {
                        callsign,
                        full_name,
                    } => {
                        assert_eq!(callsign, "AB123");
                        assert_eq!(full_name.as_deref(), Some("Ada Bravo"));
                    }
                    other => panic!("expected create action, got {other:?}"),
                }
            },
        );
    }

    #[test]
    fn delete_action_keeps_raw_callsign() {
        temp_env::with_vars(
            [
                ("LOGBOOK_BACKEND_URL", Some("https://auth.logbook.internal")),
                ("LOGBOOK_SERVICE_KEY", Some("secret")),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec![
                    "logbook-identity",
                    "delete",
                    "-c",
                    "  Pilot-7 ",
                ]);
                let (action, _globals) = handler(&matches).expect("handler should succeed");

                // Normalization happens at the identity layer, not in dispatch.
                match action {
                    Action::Delete { callsign } => assert_eq!(callsign, "  Pilot-7 "),
                    other => panic!("expected delete action, got {other:?}"),
                }
            },
        );
    }
}

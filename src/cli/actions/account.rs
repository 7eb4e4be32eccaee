//! Account actions executed with the privileged backend client.

use crate::APP_USER_AGENT;
use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::identity::{login_address, normalize_callsign};
use admin_client::{Account, AdminClient};
use anyhow::{Context, Result, anyhow};
use serde_json::json;
use tracing::info;

async fn require_account(client: &AdminClient, callsign: &str) -> Result<Account> {
    client
        .account_by_login(&login_address(callsign))
        .await?
        .ok_or_else(|| anyhow!("no account for callsign {callsign}"))
}

fn print_account(account: &Account) {
    println!("{}", json!({ "id": account.id, "login": account.login }));
}

/// Handle an account action.
///
/// A fresh privileged client is built per action; construction fails fast if
/// the backend URL or service key is missing, before any request is sent.
///
/// # Errors
/// Returns an error if the client cannot be configured, the backend request
/// fails, or the referenced account does not exist.
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let client = AdminClient::new(APP_USER_AGENT, &globals.backend_url, &globals.service_key)
        .context("backend admin client configuration")?;

    match action {
        Action::Create {
            callsign,
            full_name,
        } => {
            let mut metadata = json!({ "callsign": normalize_callsign(&callsign) });
            if let Some(full_name) = full_name {
                metadata["full_name"] = json!(full_name);
            }

            let account = client
                .create_account(&login_address(&callsign), Some(metadata))
                .await?;
            info!(id = %account.id, login = %account.login, "account created");
            print_account(&account);
        }
        Action::Show { callsign } => {
            let account = require_account(&client, &callsign).await?;
            print_account(&account);
        }
        Action::Update {
            callsign,
            full_name,
        } => {
            let account = require_account(&client, &callsign).await?;
            let metadata = json!({
                "callsign": normalize_callsign(&callsign),
                "full_name": full_name
            });
            let account = client.update_account(&account.id, metadata).await?;
            info!(id = %account.id, login = %account.login, "account updated");
            print_account(&account);
        }
        Action::Delete { callsign } => {
            let account = require_account(&client, &callsign).await?;
            client.delete_account(&account.id).await?;
            info!(id = %account.id, login = %account.login, "account deleted");
        }
    }

    Ok(())
}

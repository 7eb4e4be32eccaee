use anyhow::Result;
use logbook_identity::cli::{actions, start};

#[tokio::main]
async fn main() -> Result<()> {
    let (action, globals) = start()?;

    actions::account::handle(action, &globals).await
}

use anyhow::Result;
use serde::Serialize;

use crate::output;
use crate::solana::Context;

#[derive(Debug, Serialize)]
pub struct ShowOut {
    pub address: String,
    pub owner: String,
    pub title: String,
    pub message: String,
}

pub async fn run(ctx: &Context, title: &str, owner: Option<&str>) -> Result<()> {
    let owner = ctx.owner(owner)?;
    let (address, _bump) = ctx.client.derive_entry(title, &owner)?;
    let entry = ctx.client.fetch_entry(&address).await?;

    output::print(&ShowOut {
        address: address.to_string(),
        owner: entry.owner.to_string(),
        title: entry.title.clone(),
        message: entry.message.clone(),
    })?;
    if !output::is_json() {
        output::heading(&entry.title)?;
        println!("{}", entry.message);
    }
    Ok(())
}

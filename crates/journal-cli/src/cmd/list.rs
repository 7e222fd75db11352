use anyhow::Result;
use serde::Serialize;

use crate::output;
use crate::solana::Context;

#[derive(Debug, Serialize)]
pub struct EntryItem {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ListOut {
    pub owner: String,
    pub count: usize,
    pub entries: Vec<EntryItem>,
}

pub async fn run(ctx: &Context, owner: Option<&str>) -> Result<()> {
    let owner = ctx.owner(owner)?;
    let entries = ctx.client.fetch_entries_by_owner(&owner).await?;

    let items: Vec<EntryItem> = entries
        .iter()
        .map(|e| EntryItem { title: e.title.clone(), message: e.message.clone() })
        .collect();

    output::print(&ListOut {
        owner: owner.to_string(),
        count: items.len(),
        entries: items,
    })?;
    if !output::is_json() {
        output::heading(&format!("{} entries for {owner}", entries.len()))?;
        for entry in &entries {
            println!("  {}: {}", entry.title, entry.message);
        }
    }
    Ok(())
}

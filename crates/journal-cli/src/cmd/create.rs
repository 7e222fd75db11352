use anyhow::Result;
use serde::Serialize;
use solana_sdk::signature::Signer;

use crate::output;
use crate::solana::Context;

#[derive(Debug, Serialize)]
pub struct CreateOut {
    pub signature: String,
    pub address: String,
    pub title: String,
}

pub async fn run(ctx: &Context, title: &str, message: &str) -> Result<()> {
    let signer = ctx.signer()?;
    let signature = ctx.client.create_entry(&signer, title, message).await?;
    let (address, _bump) = ctx.client.derive_entry(title, &signer.pubkey())?;

    output::print(&CreateOut {
        signature: signature.to_string(),
        address: address.to_string(),
        title: title.to_string(),
    })
}

use anyhow::Result;
use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;

use journal_core::limits::{MAX_MESSAGE_LEN, MAX_TITLE_LEN};

use crate::output;
use crate::solana::Context;

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub url: String,
    pub rpc_version: Option<String>,
    pub program_id: String,
    pub program_found: bool,
    pub max_title_len: usize,
    pub max_message_len: usize,
}

pub async fn run(ctx: &Context) -> Result<()> {
    let rpc = RpcClient::new(ctx.url.clone());

    let rpc_version = rpc.get_version().await.ok().map(|v| v.solana_core);
    let program_found = rpc
        .get_account(&ctx.client.program_id)
        .await
        .map(|account| account.executable)
        .unwrap_or(false);

    output::print(&DoctorOut {
        url: ctx.url.clone(),
        rpc_version,
        program_id: ctx.client.program_id.to_string(),
        program_found,
        max_title_len: MAX_TITLE_LEN,
        max_message_len: MAX_MESSAGE_LEN,
    })
}

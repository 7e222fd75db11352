use anyhow::Result;

use crate::args::{Cli, Command};
use crate::solana::Context;

mod create;
mod delete;
mod doctor;
mod list;
mod show;
mod update;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;
    match cli.command {
        Command::Create { title, message } => create::run(&ctx, &title, &message).await,
        Command::Update { title, message } => update::run(&ctx, &title, &message).await,
        Command::Delete { title } => delete::run(&ctx, &title).await,
        Command::Show { title, owner } => show::run(&ctx, &title, owner.as_deref()).await,
        Command::List { owner } => list::run(&ctx, owner.as_deref()).await,
        Command::Doctor => doctor::run(&ctx).await,
    }
}

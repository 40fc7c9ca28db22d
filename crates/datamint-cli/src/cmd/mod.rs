use anyhow::Result;
use datamint_publish::drafts::DraftStore;

use crate::args::{Cli, Command};

mod draft;
mod nft;
mod publish;
mod timeouts;
mod transform;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let store = DraftStore::new(&cli.drafts, &cli.draft_prefix);
    match cli.command {
        Command::Nft { svg } => nft::run(svg.as_deref()),
        Command::Transform { form, kind } => transform::run(&store, form.as_deref(), kind.as_deref()),
        Command::Timeouts => timeouts::run(),
        Command::Publish {
            form,
            kind,
            account,
            endpoint,
            docker_proxy,
            purgatory,
            skip_purgatory,
        } => {
            let args = publish::PublishArgs {
                form,
                kind,
                account,
                endpoint,
                docker_proxy,
                purgatory,
                skip_purgatory,
                draft_prefix: cli.draft_prefix.clone(),
            };
            publish::run(&store, args).await
        }
        Command::Draft { action } => draft::run(&store, action),
    }
}

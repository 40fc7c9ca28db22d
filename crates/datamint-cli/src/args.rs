use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "datamint", version, about = "datamint CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Draft directory (default: .datamint/drafts)
    #[arg(long, global = true, default_value = ".datamint/drafts")]
    pub drafts: String,

    /// Prefix for draft keys.
    #[arg(long, global = true, default_value = "datamint-publish")]
    pub draft_prefix: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build NFT metadata and creation data for an asset.
    Nft {
        /// SVG file to embed. Defaults to generated waves.
        #[arg(long)]
        svg: Option<String>,
    },

    /// Preview canonical metadata for a form.
    Transform {
        /// Form JSON file. Defaults to the stored draft.
        #[arg(long)]
        form: Option<String>,

        /// dataset|algorithm (required when the form has no publishType)
        #[arg(long)]
        kind: Option<String>,
    },

    /// List timeout labels and their seconds.
    Timeouts,

    /// Validate, transform and publish a form.
    Publish {
        /// Form JSON file. Defaults to the stored draft.
        #[arg(long)]
        form: Option<String>,

        /// dataset|algorithm
        #[arg(long)]
        kind: Option<String>,

        /// Publishing account address.
        #[arg(long)]
        account: String,

        /// JSON publish endpoint.
        #[arg(long)]
        endpoint: String,

        #[arg(long)]
        docker_proxy: Option<String>,

        #[arg(long)]
        purgatory: Option<String>,

        /// Do not query the purgatory API.
        #[arg(long)]
        skip_purgatory: bool,
    },

    /// Inspect or reset stored drafts.
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum DraftAction {
    /// Print a stored draft (defaults when none).
    Show {
        #[arg(long, default_value = "dataset")]
        kind: String,
    },
    /// Store a form file as the draft for its variant.
    Save {
        form: String,
        #[arg(long)]
        kind: Option<String>,
    },
    /// Reset a draft to schema defaults.
    Reset {
        #[arg(long, default_value = "dataset")]
        kind: String,
    },
}

use crate::config::AppConfig;
use chrono::NaiveDate;
use clap::Subcommand;

pub mod ask;
pub mod chat;
pub mod documents;
pub mod index;
pub mod renderer;
pub mod status;

#[derive(Subcommand, PartialEq)]
pub enum Commands {
    /// Show backend status and badges
    Status {
        /// Print the raw status payload as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Ask a one-shot question against your documents
    Ask {
        /// The question to ask
        question: String,
        /// Force AI-generated answers for this question
        #[arg(long, default_value_t = false, conflicts_with = "no_ai")]
        ai: bool,
        /// Force retrieval-only answers for this question
        #[arg(long = "no-ai", default_value_t = false)]
        no_ai: bool,
        /// Only consider documents dated on or after this day (YYYY-MM-DD)
        #[arg(long = "from")]
        from_date: Option<NaiveDate>,
        /// Only consider documents dated on or before this day (YYYY-MM-DD)
        #[arg(long = "to")]
        to_date: Option<NaiveDate>,
        /// Only consider documents from this correspondent
        #[arg(long)]
        correspondent: Option<String>,
        /// Print the raw answer payload as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Inspect or rebuild the document index
    #[command(subcommand)]
    Index(IndexCommands),
    /// Browse documents and update their metadata
    #[command(subcommand)]
    Documents(DocumentCommands),
    /// List all tags
    Tags {
        /// Print the raw tag list as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Subcommand, PartialEq)]
pub enum IndexCommands {
    /// Check the index for new or changed documents
    Check,
    /// Force a background index rebuild
    Start,
}

#[derive(Subcommand, PartialEq)]
pub enum DocumentCommands {
    /// List documents with their metadata
    List {
        /// Print the raw document list as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show one document including its extracted content
    Preview {
        /// Document id
        id: i64,
    },
    /// Ask the backend to suggest metadata for a document
    Analyze {
        /// Document id
        id: i64,
        /// Print the raw suggestions as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Write metadata to a document
    Update {
        /// Document id
        id: i64,
        #[arg(long)]
        title: Option<String>,
        /// May be given multiple times
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        correspondent: Option<String>,
    },
}

impl Commands {
    pub async fn run(self, config: AppConfig) -> Result<(), String> {
        match self {
            Commands::Status { json } => status::run_status(config, json).await,
            Commands::Ask {
                question,
                ai,
                no_ai,
                from_date,
                to_date,
                correspondent,
                json,
            } => {
                let use_ai = if ai {
                    Some(true)
                } else if no_ai {
                    Some(false)
                } else {
                    None
                };
                ask::run_ask(
                    config,
                    ask::AskArgs {
                        question,
                        use_ai,
                        from_date,
                        to_date,
                        correspondent,
                        json,
                    },
                )
                .await
            }
            Commands::Index(command) => match command {
                IndexCommands::Check => index::run_check(config).await,
                IndexCommands::Start => index::run_start(config).await,
            },
            Commands::Documents(command) => documents::run(config, command).await,
            Commands::Tags { json } => documents::run_tags(config, json).await,
        }
    }
}

mod display;
mod flow;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use smartflow_ai::{AnalysisClient, AnalysisConfig};
use smartflow_core::ProcessInput;
use smartflow_store::{AuthClient, ProcessStore, SupabaseStore};

#[derive(Parser)]
#[command(name = "smartflow", version, about = "AI analysis of manual business processes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct StoreOpts {
    /// Supabase project URL, e.g. https://xyz.supabase.co
    #[arg(long, env = "SUPABASE_URL")]
    supabase_url: String,

    /// Supabase anon key
    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    supabase_key: String,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a process description for analysis and store the result
    Submit {
        #[command(flatten)]
        store: StoreOpts,

        /// OpenAI API key
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        openai_api_key: String,

        /// Owner id the record belongs to (from `smartflow login`)
        #[arg(long)]
        owner: String,

        /// Path to a process description JSON file
        #[arg(long)]
        input: PathBuf,
    },

    /// Show one stored process with its analysis
    Show {
        #[command(flatten)]
        store: StoreOpts,

        #[arg(long)]
        owner: String,

        /// Record id to show
        id: String,
    },

    /// List stored processes, most recent first
    List {
        #[command(flatten)]
        store: StoreOpts,

        #[arg(long)]
        owner: String,
    },

    /// Soft-delete a stored process
    Delete {
        #[command(flatten)]
        store: StoreOpts,

        #[arg(long)]
        owner: String,

        /// Record id to delete
        id: String,
    },

    /// Register a new account
    Signup {
        #[command(flatten)]
        store: StoreOpts,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign in and print the owner id
    Login {
        #[command(flatten)]
        store: StoreOpts,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Submit {
            store,
            openai_api_key,
            owner,
            input,
        } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let process: ProcessInput =
                serde_json::from_str(&raw).context("parsing the process description")?;

            let repo = SupabaseStore::new(store.supabase_url, store.supabase_key);
            let analyzer = AnalysisClient::new(AnalysisConfig::new(openai_api_key))?;

            // Blocks until the model answers; typically a few seconds.
            eprintln!("Analyzing, this can take a moment...");
            let record = flow::submit_process(&repo, &analyzer, &owner, &process).await?;
            println!("{}", display::render_record(&record));
        }

        Command::Show { store, owner, id } => {
            let repo = SupabaseStore::new(store.supabase_url, store.supabase_key);
            let record = repo.get(&id, &owner).await?;
            println!("{}", display::render_record(&record));
        }

        Command::List { store, owner } => {
            let repo = SupabaseStore::new(store.supabase_url, store.supabase_key);
            let records = repo.list(&owner).await?;
            println!("{}", display::render_list(&records));
        }

        Command::Delete { store, owner, id } => {
            let repo = SupabaseStore::new(store.supabase_url, store.supabase_key);
            if repo.soft_delete(&id, &owner).await? {
                println!("Deleted {id}.");
            } else {
                println!("Nothing to delete: {id} does not exist for this owner.");
            }
        }

        Command::Signup {
            store,
            email,
            password,
        } => {
            let auth = AuthClient::new(store.supabase_url, store.supabase_key);
            let user = auth.sign_up(&email, &password).await?;
            println!("Registered {} (owner id {}).", user.email, user.id);
        }

        Command::Login {
            store,
            email,
            password,
        } => {
            let auth = AuthClient::new(store.supabase_url, store.supabase_key);
            let user = auth.sign_in(&email, &password).await?;
            println!("{}", user.id);
        }
    }

    Ok(())
}

//! WafR CLI - support agent console in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{account, auth, export, search, transactions};

/// WafR - support agent console in your terminal
#[derive(Parser)]
#[command(name = "wafr", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with agent credentials
    Login {
        /// Agent email address
        email: String,
        /// Password (prompted interactively if not given)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create a new agent account
    Signup {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password (prompted interactively if not given)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the current session
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Request a password reset email
    ForgotPassword {
        /// Email address
        email: String,
    },

    /// Search a user by phone number
    Search {
        /// Phone number (exact match)
        phone: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show account details for a user id
    Account {
        /// User identifier
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Block a user's account
    Block {
        /// User identifier
        id: String,
    },

    /// Unblock a user's account
    Unblock {
        /// User identifier
        id: String,
    },

    /// List a user's transactions
    Transactions {
        /// User identifier
        user_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a transaction report to a text file
    Export {
        /// User identifier
        user_id: String,
        /// Output path (defaults to wafr-report-<user-id>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { email, password } => auth::login(&email, password).await,
        Commands::Signup { name, email, password } => auth::signup(&name, &email, password).await,
        Commands::Logout => auth::logout().await,
        Commands::Whoami { json } => auth::whoami(json),
        Commands::ForgotPassword { email } => auth::forgot_password(&email).await,
        Commands::Search { phone, json } => search::run(&phone, json).await,
        Commands::Account { id, json } => account::show(&id, json).await,
        Commands::Block { id } => account::block(&id).await,
        Commands::Unblock { id } => account::unblock(&id).await,
        Commands::Transactions { user_id, json } => transactions::run(&user_id, json).await,
        Commands::Export { user_id, output } => export::run(&user_id, output).await,
    }
}

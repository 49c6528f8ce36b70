//! CLI frontend for the Nexus Hub CARE economy and SAVE_CODE export.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nexus",
    about = "Nexus Hub: track campaigns, earn CARE, hatch dragons, export SAVE_CODEs",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file holding users, campaigns, and sessions
    #[arg(long, global = true, default_value = "nexus.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new player account
    Signup {
        /// Login email
        email: String,
    },

    /// Start a new campaign
    NewCampaign {
        /// Campaign name
        name: String,

        /// Game system (Fantasy, Sci-Fi, Cyberpunk, Horror, Cozy, Custom, or anything else)
        #[arg(short, long, default_value = "Fantasy")]
        system: String,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,

        /// Owner's email
        #[arg(short, long)]
        user: String,
    },

    /// Log a played session and earn CARE
    LogSession {
        /// Campaign id
        campaign: String,

        /// Earning action (attendance, storytelling, helped, recap); repeatable
        #[arg(short, long = "action")]
        actions: Vec<String>,

        /// What happened this session
        #[arg(short, long)]
        recap: Option<String>,

        /// Session date as YYYY-MM-DD (default: now)
        #[arg(long)]
        date: Option<String>,

        /// Player's email
        #[arg(short, long)]
        user: String,
    },

    /// Spend 1,000 CARE on an Ember Egg
    BuyEgg {
        /// Player's email
        #[arg(short, long)]
        user: String,
    },

    /// Name your hatched dragon
    NameDragon {
        /// The dragon's new name
        name: String,

        /// Player's email
        #[arg(short, long)]
        user: String,
    },

    /// Show balance, egg progress, campaigns, and recent sessions
    Status {
        /// Player's email
        #[arg(short, long)]
        user: String,
    },

    /// List every campaign as a portal in the multiverse
    Portal {
        /// Player's email
        #[arg(short, long)]
        user: String,
    },

    /// Compile a campaign into a portable SAVE_CODE
    Export {
        /// Campaign id
        campaign: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hub address used in links
        #[arg(long)]
        hub_url: Option<String>,

        /// Compression profile stamped into the document (default: BALANCED)
        #[arg(long)]
        compression: Option<String>,

        /// Player's email
        #[arg(short, long)]
        user: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let data = cli.data.as_path();
    let result = match cli.command {
        Commands::Signup { email } => commands::signup::run(data, &email),
        Commands::NewCampaign {
            name,
            system,
            description,
            user,
        } => commands::new_campaign::run(data, &user, &name, &system, description.as_deref()),
        Commands::LogSession {
            campaign,
            actions,
            recap,
            date,
            user,
        } => commands::log_session::run(
            data,
            &user,
            &campaign,
            &actions,
            recap.as_deref(),
            date.as_deref(),
        ),
        Commands::BuyEgg { user } => commands::buy_egg::run(data, &user),
        Commands::NameDragon { name, user } => commands::name_dragon::run(data, &user, &name),
        Commands::Status { user } => commands::status::run(data, &user),
        Commands::Portal { user } => commands::portal::run(data, &user),
        Commands::Export {
            campaign,
            output,
            hub_url,
            compression,
            user,
        } => commands::export::run(
            data,
            &user,
            &campaign,
            output.as_deref(),
            hub_url.as_deref(),
            compression.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::context::ClientContext;
use commands::{add, config, list, name, ping, search};

mod commands;
mod feedback;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "reelclub")]
#[command(about = "Reelclub - one shared watchlist for your movie nights")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: feedback::OutputFormat,

    /// Shared-list server URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the shared watchlist
    #[command(long_about = "Fetch the shared watchlist from the server and render it, newest entries the way the server orders them. Fails soft: a server problem leaves whatever is on screen untouched and prints a status line.")]
    List,

    /// Search for titles through the server's metadata provider
    #[command(long_about = "Search the metadata provider the server proxies. Results are numbered so they can be added with 'reelclub add --pick'.")]
    Search {
        /// Title to look for
        query: String,

        /// Narrow results to one media type
        #[arg(long, value_enum, value_name = "TYPE")]
        media_type: Option<MediaTypeFilter>,
    },

    /// Search and add a result to the shared list
    #[command(long_about = "Search for a title, choose one of the results, and append it to the shared list attributed to your saved display name. Prompts for the name if none is saved yet.")]
    Add {
        /// Title to look for
        query: String,

        /// Narrow results to one media type
        #[arg(long, value_enum, value_name = "TYPE")]
        media_type: Option<MediaTypeFilter>,

        /// Pick result N (1-based) instead of being asked
        #[arg(long, value_name = "N")]
        pick: Option<usize>,

        /// Attach a note to the new entry
        #[arg(long, value_name = "TEXT")]
        note: Option<String>,
    },

    /// Manage the display name shown next to your entries
    Name {
        #[command(subcommand)]
        cmd: Option<NameCommands>,
    },

    /// Inspect or change client configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },

    /// Check that the server is reachable
    Ping,
}

#[derive(Subcommand)]
enum NameCommands {
    /// Show the saved display name
    Show,

    /// Save a display name (prompts when NAME is omitted)
    Set {
        name: Option<String>,
    },

    /// Forget the saved display name
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set the server URL used when --server is not given
    Server {
        #[arg(long, value_name = "URL")]
        url: String,
    },
}

/// Media types the search provider understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MediaTypeFilter {
    Movie,
    Series,
    Episode,
}

impl MediaTypeFilter {
    fn as_param(self) -> &'static str {
        match self {
            MediaTypeFilter::Movie => "movie",
            MediaTypeFilter::Series => "series",
            MediaTypeFilter::Episode => "episode",
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let feedback = feedback::Feedback::new(cli.output, cli.quiet);
    let mut ctx = ClientContext::initialise(cli.server.as_deref(), feedback)?;

    match cli.command {
        Commands::List => list::run_list(&ctx).await,
        Commands::Search { query, media_type } => {
            search::run_search(&ctx, &query, media_type.map(MediaTypeFilter::as_param)).await
        }
        Commands::Add {
            query,
            media_type,
            pick,
            note,
        } => add::run_add(&mut ctx, &query, media_type.map(MediaTypeFilter::as_param), pick, note).await,
        Commands::Name { cmd } => name::run_name(&mut ctx, cmd.unwrap_or(NameCommands::Show)),
        Commands::Config { cmd } => config::run_config(&ctx, cmd.unwrap_or(ConfigCommands::Show)),
        Commands::Ping => ping::run_ping(&ctx).await,
    }
}

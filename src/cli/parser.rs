use clap::{Parser, Subcommand};

/// Command-line interface definition for rTripPlanner
/// CLI client for the HOS-aware trip planning service
#[derive(Parser)]
#[command(
    name = "rtripplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan truck trips, browse trip history and print duty-status log sheets",
    long_about = None
)]
pub struct Cli {
    /// Planning service base URL (overrides the configuration file)
    #[arg(global = true, long = "api-url", env = "RTRIPPLANNER_API_URL")]
    pub api_url: Option<String>,

    /// Use a custom configuration file (useful for tests)
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Disable coloured output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Print diagnostic logs on stderr
    #[arg(global = true, long, short)]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Plan a new trip and print its summary, stops and log sheets
    Plan {
        /// Current location (e.g. "Dallas, TX")
        current: String,
        /// Pickup location (e.g. "Houston, TX")
        pickup: String,
        /// Dropoff location (e.g. "Chicago, IL")
        dropoff: String,

        /// Hours already used in the current 70h cycle (0-70)
        #[arg(
            long = "cycle",
            short = 'c',
            default_value_t = 0.0,
            allow_negative_numbers = true
        )]
        cycle_hours: f64,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// List recent trips
    History {
        /// How many trips to show (default from configuration)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Print the raw JSON returned by the service
        #[arg(long)]
        json: bool,
    },

    /// Show a stored trip by id
    Show {
        /// Trip id (see `history`)
        id: u64,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Interactive planning session
    Shell,
}

/// Output options shared by `plan` and `show`.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct ViewArgs {
    /// Keep today's log sheet on screen with a live "now" marker (Ctrl+C to stop)
    #[arg(long)]
    pub watch: bool,

    /// Draw rest/fuel breaks on their own log sheet row
    #[arg(long = "rest-row")]
    pub rest_row: bool,

    /// Print the raw JSON returned by the service
    #[arg(long, conflicts_with = "watch")]
    pub json: bool,
}

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::config_path;

/// Handle the `init` command
///
/// Writes the default configuration file. An existing file is kept unless
/// `--force` is given; in test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = config_path(cli.config_file.as_deref());

        println!("⚙️  Initializing rTripPlanner…");
        println!("📄 Config file : {}", path.display());

        if cli.test {
            messages::info("Test mode: configuration file not written.");
            return Ok(());
        }

        if path.exists() && !*force {
            messages::warning("Configuration file already exists (use --force to overwrite).");
            return Ok(());
        }

        Config::default().save_to(&path)?;
        messages::success(format!("Configuration written to {}", path.display()));
    }
    Ok(())
}

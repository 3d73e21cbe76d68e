use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: Option<&str>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        init,
    } = cmd
    {
        if *print_config {
            println!("📄 Effective configuration:\n");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("serialize: {}", e)))?;
            println!("{}", yaml);
        }

        if *path {
            println!("{}", Config::config_file().display());
        }

        if *init {
            let written = Config::default().save(config_path)?;
            success(format!("Default configuration written: {}", written.display()));
        }
    }
    Ok(())
}

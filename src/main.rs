// Load i18n translations
rust_i18n::i18n!("locales", fallback = "en");

mod cli;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, run_demo};
use multishare_ui::services::config_service::ConfigService;
use multishare_ui::utils::{format_size, i18n, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    match cli.log_level {
        Some(ref level) => logger::init_with_level(level),
        None => logger::init(),
    }

    let config_service = match cli.config_dir {
        Some(dir) => ConfigService::with_dir(dir)?,
        None => ConfigService::new()?,
    };

    // Set default language
    i18n::set_language(&config_service);
    tracing::info!("Current language: {}", i18n::current_language());

    match cli.command {
        Commands::Size { bytes } => {
            for count in bytes {
                println!("{}\t{}", count, format_size(count));
            }
        }
        Commands::Demo { no_container, window_ms } => {
            let config = config_service.load_config()?;
            run_demo(config, no_container, window_ms).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config_service.load_config()?;
                print!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigAction::Path => {
                println!("{}", config_service.settings_file().display());
            }
            ConfigAction::Init => {
                config_service.save_config(&Default::default())?;
                let path = config_service.settings_file();
                println!("{}", rust_i18n::t!("config.saved", path = path.display().to_string()));
            }
        },
    }

    Ok(())
}

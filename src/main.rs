use arcade_interface::utils::{logger, validation::Validate};
use arcade_interface::{ArcadeError, ArcadeInterface, CliConfig, TomlConfig, VERSION};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.version_only {
        println!("{}", VERSION);
        return Ok(());
    }

    if let Err(e) = run(&cli) {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<(), ArcadeError> {
    cli.validate()?;

    let mut config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    if let Some(name) = &cli.name {
        config.interface.name = name.clone();
    }
    config.validate()?;

    if config.log_format() == "json" {
        logger::init_json_logger(config.log_level(), cli.verbose);
    } else {
        logger::init_cli_logger(config.log_level(), cli.verbose);
    }
    tracing::debug!("Effective config: {:?}", config);

    let mut interface = ArcadeInterface::from_config(&config);
    let status = interface.initialize()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{} (v{})", status.message, status.version);
    }

    Ok(())
}

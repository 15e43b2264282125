use clap::Parser;
use train_registry::utils::{logger, validation::Validate};
use train_registry::{CliConfig, LocalStorage, RegistrySettings, Repl};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match RegistrySettings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Make sure the settings file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(settings.verbose);
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::debug!("Configuration validation failed: {:?}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    let mut repl = Repl::new(LocalStorage::default(), settings.prompt.clone());

    if let Some(file_name) = &settings.autoload {
        tracing::info!("📁 Loading {} on start-up", file_name);
        if let Err(e) = repl.load_file(file_name, &mut out) {
            tracing::debug!("Loading {} failed: {:?}", file_name, e);
            eprintln!("❌ Could not load {}: {}", file_name, e.user_friendly_message());
        }
    }

    repl.run(&mut input, &mut out, &mut err)?;
    tracing::debug!("Session ended with {} trains", repl.registry().len());

    Ok(())
}

use clap::Parser;
use course_catalog::app::menu::Menu;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{CatalogLoader, CliConfig, FileSource};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting course-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let loader = CatalogLoader::new(FileSource::new());
    let index = loader.bootstrap(&config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(FileSource::new(), index, stdin.lock(), stdout.lock());
    menu.run()?;

    Ok(())
}

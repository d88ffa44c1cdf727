use anyhow::Context;
use card_view::utils::{logger, validation::Validate};
use card_view::{
    render_summary, CardError, CardRecord, CardSource, CardView, CliConfig, DisplayConfig,
    LocalCardStore,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting card-view");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let display = match &config.config {
        Some(path) => DisplayConfig::from_file(path)
            .and_then(|display| display.validate().map(|_| display))
            .unwrap_or_else(|e| exit_with(&e)),
        None => DisplayConfig::default(),
    };

    let store = LocalCardStore::from_file(&config.cards).unwrap_or_else(|e| exit_with(&e));
    tracing::info!("Loaded {} cards from {}", store.len(), config.cards);

    let records = if config.names.is_empty() {
        store.cards().to_vec()
    } else {
        let mut found: Vec<CardRecord> = Vec::with_capacity(config.names.len());
        for name in &config.names {
            match store.named(name) {
                Ok(lookup) => found.push(lookup.into()),
                Err(e) => exit_with(&e),
            }
        }
        found
    };

    let mut summaries = Vec::with_capacity(records.len());
    for record in records {
        let card = CardView::new(record).context("failed to normalize card")?;
        let summary = render_summary(&card, &display.colors)
            .with_context(|| format!("failed to summarize {}", card))?;
        summaries.push(summary);
    }

    println!("{}", summaries.join("\n\n"));
    tracing::info!("Printed {} cards", summaries.len());
    Ok(())
}

fn exit_with(e: &CardError) -> ! {
    tracing::error!("{}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

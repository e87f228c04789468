use clap::{Arg, Command};
use runtime_translate::mt::{ProviderKind, TranslateConfig, TranslationService};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("runtime-translate")
        .version("0.1.0")
        .about("Translate runtime strings through the cached translation service")
        .arg(
            Arg::new("target-locale")
                .help("Target locale (e.g., fr, de, zh-Hant)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("text")
                .help("One or more texts to translate")
                .required(true)
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML config file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Google Translate")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show cache and fallback details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let target_locale = matches
        .get_one::<String>("target-locale")
        .ok_or("missing target locale")?;
    let texts: Vec<String> = matches
        .get_many::<String>("text")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let verbose = matches.get_flag("verbose");

    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = TranslateConfig::load(matches.get_one::<PathBuf>("config").map(|p| p.as_path()))?;
    if matches.get_flag("mock") {
        config.provider = ProviderKind::Mock;
    }

    let service = match TranslationService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Set it with: export GOOGLE_TRANSLATE_API_KEY=your_api_key");
            eprintln!("   Or use --mock to use mock translator");
            return Err(e.into());
        }
    };

    if verbose {
        println!("🌍 en → {} via {}", target_locale, service.provider_name());
        println!();
    }

    let batch = service.translate_batch(&texts, target_locale).await;
    for item in &batch.items {
        println!("{}", item.translated_text);
        if verbose {
            if item.from_cache {
                println!("   (cached)");
            }
            if let Some(note) = item.note {
                println!("   ℹ️  {}", note.message());
            }
            if let Some(err) = &item.error {
                println!("   ⚠️  {}: {}", err.kind(), err);
            }
        }
    }

    Ok(())
}

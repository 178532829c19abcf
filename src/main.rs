//! Studio Site command-line harness
//!
//! Loads the configuration, settings payload and translations, then prints
//! translations or the language picker for the active language.
//!
//! Usage:
//!   studio-site [--lang <code>] [--config] [--stats] [key ...]

use anyhow::Context;
use tracing::{info, warn};

use studio_site::{
    config::AppConfig,
    utils::logging,
    state::SiteContext,
};

#[derive(Debug, Default)]
struct CliArgs {
    lang: Option<String>,
    print_config: bool,
    print_stats: bool,
    keys: Vec<String>,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => {
                let code = iter.next().context("--lang requires a language code")?;
                args.lang = Some(code);
            }
            "--config" => args.print_config = true,
            "--stats" => args.print_stats = true,
            _ => args.keys.push(arg),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = parse_args()?;

    // Load configuration
    let config = AppConfig::new().context("failed to load configuration")?;
    config.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&config.logging)?;

    info!("Starting {}", studio_site::info());

    if args.print_config {
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let locale_hint = std::env::var("LANG").ok();
    let mut ctx = SiteContext::from_config(&config, locale_hint.as_deref())
        .await
        .context("failed to initialize site context")?;

    if let Some(code) = &args.lang {
        if !ctx.localizer.set_language(code) {
            warn!(code = %code, "Keeping current language");
        }
    }

    if args.print_stats {
        let stats = ctx.localizer.catalog().get_stats();
        println!("total keys: {}", stats.total_keys);
        for lang in &stats.languages {
            println!("{}: {} keys, {} missing", lang.code, lang.key_count, lang.missing_keys);
        }
    }

    if args.keys.is_empty() {
        println!("active language: {}", ctx.localizer.language());
        for info in ctx.available_languages() {
            println!("{} {} ({})", info.flag, info.name, info.code);
        }
    } else {
        for key in &args.keys {
            println!("{} = {}", key, ctx.t(key));
        }
    }

    Ok(())
}

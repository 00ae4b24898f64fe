//! Ratio matcher CLI
//!
//! Usage:
//!   match_ratios <flour> <liquid> <eggs>     classify a ratio
//!   match_ratios scale <recipe-id> <factor>  print scaled ingredients
//!   match_ratios history                     print the cooking journal
//!
//! Run with: cargo run --features cli --bin match_ratios -- 2 2 1

use anyhow::{bail, Context, Result};
use breakfast_ratios::journal::stats::{format_duration, format_relative, type_breakdown};
use breakfast_ratios::scaler::{format_scale_factor, snap_scale_factor};
use breakfast_ratios::{scale_recipe, Config, Ratios, RatioMatcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "usage: match_ratios <flour> <liquid> <eggs> | scale <recipe-id> <factor> | history";

fn main() -> Result<()> {
    let config = Config::from_env();

    // BREAKFAST_LOG, then RUST_LOG, then info for our crate, warn for others
    let filter = match &config.log_filter {
        Some(filter) => EnvFilter::try_new(filter).context("Invalid BREAKFAST_LOG filter")?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "breakfast_ratios=info,warn".into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    config.log_summary();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("scale") => scale(&config, &args[1..]),
        Some("history") => history(&config),
        Some(_) => classify(&config, &args),
        None => bail!(USAGE),
    }
}

fn parse_number(arg: &str, what: &str) -> Result<f64> {
    arg.parse()
        .with_context(|| format!("{} must be a number, got {:?}", what, arg))
}

fn classify(config: &Config, args: &[String]) -> Result<()> {
    let [flour, liquid, eggs] = args else {
        bail!(USAGE);
    };
    let ratios = Ratios::new(
        parse_number(flour, "flour")?,
        parse_number(liquid, "liquid")?,
        parse_number(eggs, "eggs")?,
    );

    let catalog = config.load_catalog()?;
    let matcher = RatioMatcher::new(&catalog);
    let result = matcher.match_ratios(ratios);

    println!(
        "Normalized: flour {:.1}%  liquid {:.1}%  eggs {:.1}%",
        result.normalized.flour, result.normalized.liquid, result.normalized.eggs
    );
    println!("Closest:    {}", catalog.display_name(result.breakfast_type));
    if let Some(definition) = catalog.get(result.breakfast_type) {
        println!("            {}", definition.description);
    }

    println!();
    println!("Ranking:");
    for (rank, ranked) in matcher.rank_all(ratios).iter().enumerate() {
        println!(
            "  {}. {:<16} {:>6.2}",
            rank + 1,
            catalog.display_name(ranked.breakfast_type),
            ranked.distance
        );
    }
    Ok(())
}

fn scale(config: &Config, args: &[String]) -> Result<()> {
    let [recipe_id, factor] = args else {
        bail!(USAGE);
    };
    let factor = snap_scale_factor(parse_number(factor, "factor")?);

    let book = config.load_recipes()?;
    let Some(recipe) = book.recipe_by_id(recipe_id) else {
        bail!("Unknown recipe {:?}", recipe_id);
    };

    println!("{} ({})", recipe.name, format_scale_factor(factor));
    for ingredient in scale_recipe(recipe, factor) {
        println!("  {}", ingredient);
    }
    Ok(())
}

fn history(config: &Config) -> Result<()> {
    let journal = config.open_journal()?;
    let now = chrono::Utc::now().timestamp_millis();

    if journal.history().is_empty() {
        println!("No breakfasts cooked yet");
        return Ok(());
    }

    for entry in journal.history() {
        let mut line = format!(
            "{:<12} {} ({})",
            format_relative(entry.timestamp, now),
            entry.recipe_name,
            format_scale_factor(entry.scale_factor)
        );
        if let Some(total) = entry.cooking_duration {
            line.push_str(&format!("  {}", format_duration(total)));
        }
        if let Some(rating) = entry.rating {
            line.push_str(&format!("  {}/5", rating));
        }
        println!("{}", line);
    }

    println!();
    for share in type_breakdown(journal.history()) {
        println!(
            "  {:<16} {:>3}  {:>5.1}%",
            share.breakfast_type, share.count, share.percentage
        );
    }
    Ok(())
}

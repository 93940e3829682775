use anyhow::{Context, Result};
use clap::Parser;
use property_finder::config::{Config, ExtractorKind};
use property_finder::nlu::{FilterExtractor, GroqExtractor, JsonExtractor};
use property_finder::{Assistant, Catalog, Reply};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so replies stay on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    info!("🏠 Property Finder");

    let catalog = Catalog::load(&config.catalog)?;
    info!(
        "Loaded {} properties at {}",
        catalog.len(),
        catalog.loaded_at().format("%Y-%m-%d %H:%M:%S")
    );

    let extractor: Box<dyn FilterExtractor> = match config.extractor {
        ExtractorKind::Groq => Box::new(
            GroqExtractor::new(config.groq()).context("Failed to create extraction client")?,
        ),
        ExtractorKind::Json => Box::new(JsonExtractor::new()),
    };
    info!("Using {} filter extraction", extractor.source_name());

    let assistant = Assistant::new(catalog, extractor);

    if let Some(query) = &config.query {
        let reply = assistant.ask(query).await;
        print_reply(&reply, &config)?;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read query")? {
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let reply = assistant.ask(query).await;
        print_reply(&reply, &config)?;
    }

    Ok(())
}

fn print_reply(reply: &Reply, config: &Config) -> Result<()> {
    if config.json {
        println!("{}", serde_json::to_string(reply)?);
        return Ok(());
    }

    println!("{}", reply.message());
    if reply.results().is_empty() {
        println!();
        return Ok(());
    }

    println!("Here are the top matching properties for you:\n");
    for (i, property) in reply.results().iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.price_formatted);
        println!("   {}, {}", property.locality, property.city);
        if !property.possession_status.is_empty() {
            println!("   Status: {}", property.possession_status.replace('_', " "));
        }
        let amenities = property.amenity_list();
        if !amenities.is_empty() {
            println!("   Amenities: {}", amenities.join(", "));
        }
        println!("   Image: {}", property.first_image);
        if let Some(url) = property.listing_url(&config.site_url) {
            println!("   URL: {}", url);
        }
        println!();
    }

    Ok(())
}

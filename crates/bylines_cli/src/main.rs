//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build a small sample catalog through the process-wide registry.
//! - Print the derived views so core wiring can be checked by eye.
//!
//! Logging is enabled only when `BYLINES_LOG_DIR` is set; the level comes from
//! `BYLINES_LOG_LEVEL` or the build default.

use bylines_core::{
    core_version, default_log_level, init_logging, with_catalog, GlobalCatalog, RepoResult,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("bylines_core version={}", core_version());

    if let Ok(log_dir) = std::env::var("BYLINES_LOG_DIR") {
        let level = std::env::var("BYLINES_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match with_catalog(run_sample) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_sample module=cli status=error error={err}");
            eprintln!("sample failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_sample(catalog: &mut GlobalCatalog) -> RepoResult<()> {
    let author = catalog.create_author("John Doe")?;
    let tech = catalog.create_magazine("TechWorld", "Technology")?;
    let health = catalog.create_magazine("HealthPlus", "Health")?;

    catalog.add_article(author, tech, "The Future of AI")?;
    catalog.add_article(author, health, "Healthy Eating Tips")?;

    let articles: Vec<String> = catalog
        .author_articles(author)?
        .into_iter()
        .map(|article| catalog.describe_article(article.id()))
        .collect::<RepoResult<_>>()?;
    println!("articles: [{}]", articles.join(", "));

    let magazines: Vec<String> = catalog
        .author_magazines(author)?
        .into_iter()
        .map(ToString::to_string)
        .collect();
    println!("magazines: [{}]", magazines.join(", "));

    match catalog.magazine_article_titles(tech)? {
        Some(titles) => println!("titles: {titles:?}"),
        None => println!("titles: none"),
    }

    let contributors: Vec<String> = catalog
        .magazine_contributors(tech)?
        .into_iter()
        .map(ToString::to_string)
        .collect();
    println!("contributors: [{}]", contributors.join(", "));

    Ok(())
}

use anyhow::{Context, Result};

use scriptsmith::chain::{ChainOutput, ReviewChain};
use scriptsmith::config::Config;
use scriptsmith::corpus::ReferenceCorpus;
use scriptsmith::prompt::build_style_extraction_prompt;

use crate::app::form::collect_request;
use crate::cli::{Cli, Commands};
use crate::ui::style as ui;

pub const STYLE_GUIDELINES: &str = "Style Guidelines";
pub const NEW_REVIEW: &str = "New Restaurant Review";

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let corpus_path = cli.corpus.unwrap_or_else(|| config.corpus_path.clone());
    let corpus = ReferenceCorpus::load(&corpus_path, &config.corpus_columns())
        .with_context(|| format!("Failed to load reference corpus {}", corpus_path.display()))?;

    let chain = ReviewChain::from_config(&config)?;

    match cli.command {
        Commands::Corpus { prompt } => show_corpus(&chain, &corpus, prompt),
        Commands::Style => {
            let profile = chain.extract_style(&corpus).await?;
            ui::print_section(STYLE_GUIDELINES, profile.as_str());
            Ok(())
        }
        Commands::Generate {
            fields,
            no_input,
            json,
        } => {
            let request = collect_request(fields, !no_input)?;
            let output = chain.run(&corpus, &request).await?;
            print_output(&output, json)
        }
    }
}

fn show_corpus(chain: &ReviewChain, corpus: &ReferenceCorpus, with_prompt: bool) -> Result<()> {
    println!(
        "{} {}",
        ui::header("Reference scripts:"),
        ui::dim(corpus.len())
    );
    for script in corpus {
        println!("  {} {}", ui::accent("›"), ui::value(&script.location));
    }

    if with_prompt {
        let prompt = build_style_extraction_prompt(chain.prompts(), &corpus.render_fragment())?;
        ui::print_section("Style extraction prompt", &prompt);
    }
    Ok(())
}

fn print_output(output: &ChainOutput, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(output).context("Failed to serialize output")?
        );
    } else {
        ui::print_section(STYLE_GUIDELINES, output.style_profile.as_str());
        ui::print_section(NEW_REVIEW, output.review.as_str());
    }
    Ok(())
}

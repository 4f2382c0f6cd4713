use aar_summary_config::Config;
use aar_summary_engine::{
    Document, InlineStyle, ReportTitle, Sheet, compose_report, convert_with, sheet::Feedback,
};
use aar_summary_llm::{ChatClient, TextGenerator, summary_prompt};
use anyhow::{Context, Result};
use log::info;
use std::{
    io::{self, Read},
    path::Path,
};

use crate::{
    cli::{ConfigArgs, OutputArgs},
    output::{format_document, write_output},
};

/// Title used for converted text that has no heading of its own.
const CONVERT_TITLE: &str = "Summary";

pub fn generate(
    config_path: Option<&Path>,
    sheet_path: &Path,
    class_id: &str,
    activity_title: &str,
    output: &OutputArgs,
) -> Result<()> {
    let sheet = load_sheet(sheet_path)?;
    let feedback = sheet
        .feedback_for(class_id)
        .with_context(|| format!("Failed to collect feedback from {}", sheet_path.display()))?;

    let config = load_config(config_path)?;
    let client = build_client(&config, config.api_key())?;

    let title = ReportTitle::new(class_id, activity_title);
    let doc = summarize(&client, &title, &feedback, style(output))?;

    let content = format_document(&doc, &title.to_string(), output.format)?;
    write_output(&content, output.output.as_deref())
}

pub fn convert(file: Option<&Path>, output: &OutputArgs) -> Result<()> {
    let text = read_input(file)?;
    let doc = convert_with(&text, style(output));
    let title = doc.title().unwrap_or(CONVERT_TITLE).to_string();
    let content = format_document(&doc, &title, output.format)?;
    write_output(&content, output.output.as_deref())
}

pub fn classes(sheet_path: &Path) -> Result<()> {
    let sheet = load_sheet(sheet_path)?;
    let classes = sheet
        .classes()
        .with_context(|| format!("Failed to list classes in {}", sheet_path.display()))?;
    let mut listing = classes.join("\n");
    if !listing.is_empty() {
        listing.push('\n');
    }
    write_output(&listing, None)
}

/// Merges the given settings into the config file and saves it.
pub fn configure(config_path: Option<&Path>, args: &ConfigArgs) -> Result<()> {
    let mut config = load_config(config_path)?;
    apply_settings(&mut config, args);
    match config_path {
        Some(path) => {
            config.save_to_path(path)?;
            info!("saved config to {}", path.display());
        }
        None => {
            config.save()?;
            info!("saved config to {}", Config::config_path().display());
        }
    }
    Ok(())
}

fn apply_settings(config: &mut Config, args: &ConfigArgs) {
    if let Some(key) = &args.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(model) = &args.model {
        config.model = Some(model.clone());
    }
    if let Some(base_url) = &args.base_url {
        config.base_url = Some(base_url.clone());
    }
    if let Some(max_tokens) = args.max_tokens {
        config.max_tokens = Some(max_tokens);
    }
}

/// Generates both sections and composes the report. Any generation failure
/// aborts before a document exists.
pub fn summarize<G: TextGenerator>(
    generator: &G,
    title: &ReportTitle,
    feedback: &Feedback,
    style: InlineStyle,
) -> Result<Document> {
    info!("generating summary for '{title}'");
    let went_well = generator
        .generate(&summary_prompt(&feedback.went_well))
        .context("Failed to generate the \"went well\" summary")?;
    let improvements = generator
        .generate(&summary_prompt(&feedback.improvements))
        .context("Failed to generate the improvements summary")?;
    Ok(compose_report(title, &went_well, &improvements, style))
}

fn style(output: &OutputArgs) -> InlineStyle {
    if output.bold_spans {
        InlineStyle::BoldSpans
    } else {
        InlineStyle::Flatten
    }
}

fn load_sheet(path: &Path) -> Result<Sheet> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sheet {}", path.display()))?;
    Sheet::from_json(&json).with_context(|| format!("Failed to load sheet {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config.unwrap_or_default())
}

/// `api_key` is the key already resolved against the environment.
fn build_client(config: &Config, api_key: Option<String>) -> Result<ChatClient> {
    let mut builder = ChatClient::builder();
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    if let Some(model) = &config.model {
        builder = builder.model(model);
    }
    if let Some(base_url) = &config.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(max_tokens) = config.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    Ok(builder.build()?)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

use anyhow::{Context, Result, bail};
use datazen::Config;
use datazen::export::{ExportFormat, TableExporter, TabularRecord};
use datazen::extract::{ExtractionOptions, ExtractionResult, Extractor, HtmlDocument};
use datazen::pipeline::{Category, Pipeline};
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::cli::commands::{Cli, Commands};

const UNKNOWN_PAGE_URL: &str = "about:blank";

pub fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Extract {
            input,
            url,
            categories,
            compact,
        } => {
            if categories.is_empty() {
                bail!(
                    "select at least one category (--text, --links, --images, --emails, --phones) or --all"
                );
            }
            let result = extract_page(&config, input.as_deref(), url, &categories.options())?;
            let rendered = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            write_stdout(&rendered)
        }

        Commands::Export {
            input,
            url,
            category,
            format,
            out,
        } => {
            let category = Category::from_str(&category)
                .ok()
                .with_context(|| format!("unknown category '{category}'"))?;
            let format = parse_format(&format)?;

            let result = extract_page(&config, input.as_deref(), url, &category.options())?;
            let pipeline = Pipeline::new(
                TableExporter::new(config.export.json_style()),
                config.export.product.clone(),
            );
            let artifact = pipeline.export(&result, category, format, None)?;

            match out {
                Some(dir) => {
                    fs::create_dir_all(&dir)
                        .with_context(|| format!("Failed to create {}", dir.display()))?;
                    let path = dir.join(&artifact.filename);
                    write_file(&path, &artifact.contents)?;
                    println!("{}", path.display());
                    Ok(())
                }
                None => write_stdout(&artifact.contents),
            }
        }

        Commands::Convert {
            input,
            format,
            priority_key,
            out,
        } => {
            let format = parse_format(&format)?;
            let contents = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let records = parse_records(&contents)
                .with_context(|| format!("Failed to load records from {}", input.display()))?;

            let exporter = TableExporter::new(config.export.json_style());
            let rendered = exporter.render(format, &records, None, priority_key.as_deref())?;

            match out {
                Some(path) => write_file(&path, &rendered),
                None => write_stdout(&rendered),
            }
        }
    }
}

fn extract_page(
    config: &Config,
    input: Option<&Path>,
    url: Option<String>,
    options: &ExtractionOptions,
) -> Result<ExtractionResult> {
    let url = match url {
        Some(url) => {
            url::Url::parse(&url)
                .map_err(|e| anyhow::anyhow!("invalid page URL '{url}': {e}"))?;
            url
        }
        None => UNKNOWN_PAGE_URL.to_string(),
    };

    let html = read_input(input)?;
    let document = HtmlDocument::parse(url, &html);
    let extractor = Extractor::new(config.extraction);
    Ok(extractor.extract(&document, options))
}

fn parse_format(raw: &str) -> Result<ExportFormat> {
    ExportFormat::from_str(raw)
        .ok()
        .with_context(|| format!("unknown format '{raw}' (expected json or csv)"))
}

/// Accepts a bare array of objects or an object with a `data` array, the
/// shape returned by the scraping API.
pub(crate) fn parse_records(contents: &str) -> Result<Vec<TabularRecord>> {
    let value: Value = serde_json::from_str(contents).context("input is not valid JSON")?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(items)) => items,
            _ => bail!("expected a JSON array or an object with a \"data\" array"),
        },
        _ => bail!("expected a JSON array or an object with a \"data\" array"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => Ok(record),
            other => bail!("record {i} is not an object: {other}"),
        })
        .collect()
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read HTML from stdin")?;
            Ok(buf)
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(())
}

fn write_stdout(contents: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(contents.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

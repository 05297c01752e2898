//! The generate command: one provider call, one render, one output file.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use mindsum_config::{Overrides, Settings};
use mindsum_core::{ProviderKind, SummarizeRequest};
use mindsum_providers::create_provider;
use mindsum_render::{render, OutputFormat};

use crate::output;

pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub format: OutputFormat,
    pub prompt: Option<String>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    if text.trim().is_empty() {
        bail!("nothing to summarize: the input is empty");
    }

    let settings = Settings::load()?.with_overrides(&Overrides {
        provider: args.provider,
        model: args.model.clone(),
        language: args.language.clone(),
    });

    let provider = create_provider(&settings)?;
    info!(provider = %provider.name(), format = %args.format, "Generating mindmap");

    let mut request = SummarizeRequest::new(text, settings.language.clone());
    if let Some(extra) = &args.prompt {
        request = request.with_instructions(extra.clone());
    }

    let result = provider.summarize(&request).await?;
    info!(title = %result.title, themes = result.nodes.len(), "Summary received");

    let rendered = render(args.format, &result);

    if args.stdout {
        println!("{rendered}");
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => {
            let dir = args
                .input
                .as_deref()
                .and_then(|p| p.parent())
                .map(PathBuf::from)
                .unwrap_or_default();
            dir.join(args.format.default_filename(&result.title))
        }
    };
    let path = output::unique_path(path);

    std::fs::write(&path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "Mindmap written");
    println!("{}", path.display());

    Ok(())
}

fn read_input(input: Option<&std::path::Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

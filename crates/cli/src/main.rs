mod generate_cmd;
mod models_cmd;
mod output;
mod providers_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mindsum_core::ProviderKind;
use mindsum_render::OutputFormat;

#[derive(Parser)]
#[command(name = "mindsum")]
#[command(about = "Mindsum — summarize notes into mindmaps via LLM providers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a note into a mindmap
    Generate {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Provider to use (openai, anthropic, gemini, grok)
        #[arg(short, long, value_parser = clap::value_parser!(ProviderKind))]
        provider: Option<ProviderKind>,
        /// Model override for the selected provider
        #[arg(short, long)]
        model: Option<String>,
        /// Output language for node labels
        #[arg(short, long)]
        language: Option<String>,
        /// Output format (mermaid, markdown, markmap, canvas)
        #[arg(short, long, default_value = "mermaid", value_parser = clap::value_parser!(OutputFormat))]
        format: OutputFormat,
        /// Extra instructions appended to the prompt
        #[arg(long)]
        prompt: Option<String>,
        /// Explicit output path; defaults to "<title> - <suffix>" next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the rendered mindmap to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// List available models per provider
    Models,
    /// List providers and whether a key is configured
    Providers,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            provider,
            model,
            language,
            format,
            prompt,
            output,
            stdout,
        } => {
            generate_cmd::run(generate_cmd::GenerateArgs {
                input,
                provider,
                model,
                language,
                format,
                prompt,
                output,
                stdout,
            })
            .await
        }
        Commands::Models => models_cmd::run(),
        Commands::Providers => providers_cmd::run(),
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use the_toolbench::config::{load_and_validate_config, Config, RuntimeBuilder, ToolRegistry};
use the_toolbench::engine::ToolSession;
use the_toolbench::model::ToolParameters;
use the_toolbench::presenter::{filename_basis, TracingNotifier};
use the_toolbench::traits::ToolCategory;

#[derive(Parser)]
#[command(name = "toolbench")]
#[command(about = "Run calculators, writers, rewriters and checkers from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// YAML or TOML configuration file; defaults to every built-in tool
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List hosted tools
    List,

    /// Run one tool
    Run {
        /// Tool ID, as shown by `list`
        tool: String,

        /// Tool parameter as key=value; repeatable
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Copy the rendered result to the clipboard
        #[arg(long)]
        copy: bool,

        /// Save the result to the download directory
        #[arg(long)]
        download: bool,

        /// Print the text with every suggestion applied (checkers only)
        #[arg(long)]
        fix: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

struct RunOptions {
    format: OutputFormat,
    copy: bool,
    download: bool,
    fix: bool,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load(cli.config.as_ref())?;

    match cli.command {
        Commands::List => {
            let registry = ToolRegistry::from_config(&config)?;
            list_tools(&registry);
            Ok(())
        }
        Commands::Run {
            tool,
            params,
            format,
            copy,
            download,
            fix,
        } => {
            let options = RunOptions {
                format,
                copy,
                download,
                fix,
            };
            run_tool(&config, &tool, &params, options).await
        }
    }
}

fn list_tools(registry: &ToolRegistry) {
    let width = registry.ids().iter().map(|id| id.len()).max().unwrap_or(0);
    for (id, tool) in registry.iter() {
        println!(
            "{:<width$}  {:<10}  {}",
            id,
            tool.category(),
            tool.description(),
            width = width
        );
    }
}

async fn run_tool(config: &Config, tool_id: &str, pairs: &[String], options: RunOptions) -> Result<()> {
    let (registry, simulator, presenter_settings) = RuntimeBuilder::from_config(config)?;
    let tool = registry
        .get(tool_id)
        .cloned()
        .ok_or_else(|| anyhow!("Unknown tool '{}'; run `toolbench list` to see the available tools", tool_id))?;

    if options.fix && tool.category() != ToolCategory::Checker {
        bail!("--fix only applies to checker tools");
    }

    let params = ToolParameters::from_pairs(pairs).map_err(|e| anyhow!(e.user_message().to_string()))?;
    let hints = tool.render_hints();
    let notifier = Arc::new(TracingNotifier);
    let presenter = RuntimeBuilder::presenter(presenter_settings, notifier.clone());

    let mut session = ToolSession::new(tool_id, tool, simulator, notifier);
    let outcome = session
        .submit_with_observer(params.clone(), |progress| {
            eprint!("\rProcessing... {:>4}", progress.to_string());
            let _ = io::stderr().flush();
        })
        .await;
    eprint!("\r{:<20}\r", "");

    let result = outcome.map_err(|e| anyhow!(e.user_message().to_string()))?;

    match options.format {
        OutputFormat::Text => {
            println!("{}", hints.title);
            println!("{}", "─".repeat(hints.title.chars().count()));
            println!("{}", presenter.render(&result));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if options.fix {
        if let Some(report) = result.as_check() {
            println!("\nCorrected text:\n{}", report.apply_all());
        }
    }

    // presenter failures are reported but never fail the run
    if options.copy {
        match presenter.copy(&result, &hints).await {
            Ok(()) => eprintln!("Copied to clipboard"),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }
    if options.download {
        let basis = filename_basis(&hints, &params);
        match presenter.download(&result, &hints, basis).await {
            Ok(path) => eprintln!("Saved {}", path.display()),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    Ok(())
}

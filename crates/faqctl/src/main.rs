//! faqctl - CLI for the DigiSkills.PK FAQ assistant
//!
//! Starts a chat when run without a subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use faq_common::{FaqConfig, FaqError};
use faqctl::cli::{Cli, Commands};
use faqctl::render::Renderer;
use faqctl::{commands, logging};
use std::io;
use std::process::ExitCode;

fn run(cli: Cli) -> Result<()> {
    let config = FaqConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init(cli.verbose, &config.log.level);

    if config.chat.wrap_width_was_clamped() {
        tracing::warn!(
            configured = config.chat.wrap_width,
            used = config.chat.effective_wrap_width(),
            "chat.wrap_width out of range"
        );
    }

    let kb = commands::load_knowledge(cli.kb.as_deref(), &config)?;
    let renderer = Renderer::new(
        config.chat.color && !cli.no_color,
        config.chat.effective_wrap_width(),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command_or_chat() {
        Commands::Chat { transcript } => {
            drop(out);
            commands::chat(&kb, renderer, transcript.as_deref())
        }
        Commands::Ask { question, json } => {
            commands::ask(&mut out, &kb, renderer, &question.join(" "), json)
        }
        Commands::List { category } => {
            commands::list(&mut out, &kb, renderer, category.as_deref())
        }
        Commands::Popular { number } => commands::popular(&mut out, &kb, renderer, number),
        Commands::About => commands::about(&mut out, &kb, renderer),
        Commands::Check => commands::check(&mut out, &kb),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<FaqError>())
                .map(FaqError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

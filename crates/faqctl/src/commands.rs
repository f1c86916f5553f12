//! Command implementations
//!
//! Each command gets an already-loaded knowledge base. Loading happens once
//! in [`load_knowledge`] before any command runs, so a broken knowledge base
//! stops the process before a single question is answered.

use anyhow::{bail, Context, Result};
use faq_common::{respond, AnswerSource, FaqConfig, KnowledgeBase};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::render::Renderer;
use crate::repl::Session;

/// Knowledge base from `--kb`, else config `knowledge.path`, else builtin
pub fn load_knowledge(cli_path: Option<&Path>, config: &FaqConfig) -> Result<KnowledgeBase> {
    match cli_path.or(config.knowledge.path.as_deref()) {
        Some(path) => KnowledgeBase::load(path)
            .with_context(|| format!("Failed to load knowledge base {}", path.display())),
        None => {
            let kb = KnowledgeBase::builtin().context("Builtin knowledge base is invalid")?;
            info!(entries = kb.len(), "Using builtin knowledge base");
            Ok(kb)
        }
    }
}

#[derive(Debug, Serialize)]
struct AskOutput<'a> {
    question: &'a str,
    answer: &'a str,
    source: &'a AnswerSource,
}

/// Interactive chat on stdin/stdout
pub fn chat(kb: &KnowledgeBase, renderer: Renderer, transcript_path: Option<&Path>) -> Result<()> {
    let mut session = Session::new(kb, renderer);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("Chat session failed")?;

    if let Some(path) = transcript_path {
        let json = session
            .transcript()
            .to_json_pretty()
            .context("Failed to serialize transcript")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write transcript {}", path.display()))?;
        info!(path = %path.display(), turns = session.transcript().len(), "Transcript saved");
    }
    Ok(())
}

/// One question, one answer
pub fn ask(
    out: &mut dyn Write,
    kb: &KnowledgeBase,
    renderer: Renderer,
    question: &str,
    json: bool,
) -> Result<()> {
    let response = respond(question, kb);
    if json {
        let payload = AskOutput {
            question,
            answer: response.text,
            source: &response.source,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    } else {
        renderer.answer(out, response.text)?;
    }
    Ok(())
}

pub fn list(
    out: &mut dyn Write,
    kb: &KnowledgeBase,
    renderer: Renderer,
    category: Option<&str>,
) -> Result<()> {
    if let Some(name) = category {
        if kb.category(name).is_none() {
            let known: Vec<&str> = kb.categories().iter().map(|c| c.name()).collect();
            bail!("Unknown category '{}' (known: {})", name, known.join(", "));
        }
    }
    renderer.list(out, kb, category)?;
    Ok(())
}

/// List popular questions, or answer number `number`
pub fn popular(
    out: &mut dyn Write,
    kb: &KnowledgeBase,
    renderer: Renderer,
    number: Option<usize>,
) -> Result<()> {
    match number {
        None => renderer.popular(out, kb.meta())?,
        Some(n) => {
            let Some(question) = kb.popular_question(n) else {
                bail!(
                    "No popular question #{} ({} available)",
                    n,
                    kb.meta().popular_questions.len()
                );
            };
            writeln!(out, "{}", question)?;
            renderer.answer(out, respond(question, kb).text)?;
        }
    }
    Ok(())
}

pub fn about(out: &mut dyn Write, kb: &KnowledgeBase, renderer: Renderer) -> Result<()> {
    renderer.about(out, kb.meta())?;
    Ok(())
}

/// Summary of an already-validated knowledge base
pub fn check(out: &mut dyn Write, kb: &KnowledgeBase) -> Result<()> {
    writeln!(out, "Knowledge base OK")?;
    for category in kb.categories() {
        writeln!(out, "  {:<16} {} entries", category.name(), category.entries().len())?;
    }
    writeln!(
        out,
        "  {} categories, {} entries, {} popular questions",
        kb.categories().len(),
        kb.len(),
        kb.meta().popular_questions.len()
    )?;

    // Popular questions that land on the default answer are probably typos
    for (i, q) in kb.meta().popular_questions.iter().enumerate() {
        if respond(q, kb).source == AnswerSource::Default {
            writeln!(out, "  warning: popular question {} has no answer: {}", i + 1, q)?;
        }
    }
    Ok(())
}

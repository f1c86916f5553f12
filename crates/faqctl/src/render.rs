//! Terminal rendering for answers, lists and the transcript.
//!
//! Everything writes into a caller-supplied `Write` so the REPL and the
//! one-shot commands share one code path and tests can capture output.
//! Answers are opaque text: they are wrapped, never rewritten.

use faq_common::transcript::{Role, Transcript};
use faq_common::{KnowledgeBase, KnowledgeMeta};
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub const HR: &str = "------------------------------------------------------------";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub color: bool,
    pub width: usize,
}

impl Renderer {
    pub fn new(color: bool, width: usize) -> Self {
        Self { color, width }
    }

    fn heading(&self, s: &str) -> String {
        if self.color {
            s.bold().cyan().to_string()
        } else {
            s.to_string()
        }
    }

    fn dim(&self, s: &str) -> String {
        if self.color {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }

    fn label(&self, role: Role) -> String {
        let tag = format!("[{}]", role);
        if !self.color {
            return tag;
        }
        match role {
            Role::User => tag.bright_blue().to_string(),
            Role::Assistant => tag.bright_green().to_string(),
        }
    }

    fn wrapped(&self, out: &mut dyn Write, text: &str, indent: &str) -> io::Result<()> {
        let options = textwrap::Options::new(self.width)
            .initial_indent(indent)
            .subsequent_indent(indent);
        for line in textwrap::wrap(text, options) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Title block shown when a chat starts
    pub fn banner(&self, out: &mut dyn Write, meta: &KnowledgeMeta) -> io::Result<()> {
        if !meta.title.is_empty() {
            writeln!(out, "{}", self.heading(&meta.title))?;
        }
        if !meta.subtitle.is_empty() {
            self.wrapped(out, &meta.subtitle, "")?;
        }
        writeln!(out, "{}", self.dim(HR))?;
        writeln!(
            out,
            "{}",
            self.dim("Type a question, /popular for suggestions, /help for commands, /quit to leave.")
        )?;
        writeln!(out)
    }

    /// Input prompt, using the knowledge base placeholder when there is one
    pub fn prompt(&self, out: &mut dyn Write, meta: &KnowledgeMeta) -> io::Result<()> {
        if meta.prompt.is_empty() {
            write!(out, "> ")?;
        } else {
            write!(out, "{} > ", self.dim(&meta.prompt))?;
        }
        out.flush()
    }

    /// One assistant answer
    pub fn answer(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        writeln!(out, "{}", self.label(Role::Assistant))?;
        self.wrapped(out, text, "  ")?;
        writeln!(out)
    }

    /// About panel and help link
    pub fn about(&self, out: &mut dyn Write, meta: &KnowledgeMeta) -> io::Result<()> {
        let title = if meta.title.is_empty() {
            "About"
        } else {
            meta.title.as_str()
        };
        writeln!(out, "{}", self.heading(title))?;
        writeln!(out, "{}", self.dim(HR))?;
        for paragraph in meta.about.lines() {
            if paragraph.trim().is_empty() {
                writeln!(out)?;
            } else {
                self.wrapped(out, paragraph, "")?;
            }
        }
        if !meta.website.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "Need more help? Visit the official website: {}",
                meta.website
            )?;
        }
        Ok(())
    }

    /// Numbered popular questions
    pub fn popular(&self, out: &mut dyn Write, meta: &KnowledgeMeta) -> io::Result<()> {
        if meta.popular_questions.is_empty() {
            return writeln!(out, "No popular questions configured.");
        }
        writeln!(out, "{}", self.heading("Popular Questions"))?;
        for (i, q) in meta.popular_questions.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, q)?;
        }
        Ok(())
    }

    /// Categories and their questions in match order
    pub fn list(
        &self,
        out: &mut dyn Write,
        kb: &KnowledgeBase,
        only: Option<&str>,
    ) -> io::Result<()> {
        for category in kb.categories() {
            if let Some(name) = only {
                if !category.name().eq_ignore_ascii_case(name) {
                    continue;
                }
            }
            writeln!(out, "{}", self.heading(&format!("[{}]", category.name())))?;
            for (i, entry) in category.entries().iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, entry.question())?;
            }
        }
        Ok(())
    }

    /// Whole transcript, oldest first
    pub fn history(&self, out: &mut dyn Write, transcript: &Transcript) -> io::Result<()> {
        if transcript.is_empty() {
            return writeln!(out, "{}", self.dim("(no messages yet)"));
        }
        for turn in transcript.turns() {
            writeln!(
                out,
                "{} {}",
                self.label(turn.role),
                self.dim(&turn.at.format("%H:%M:%S").to_string())
            )?;
            self.wrapped(out, &turn.text, "  ")?;
        }
        Ok(())
    }
}

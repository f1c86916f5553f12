//! REPL - Conversational interface
//!
//! Reads one line at a time, answers it, and keeps the session transcript.
//! Blank lines are ignored like an empty chat box submission; lines
//! starting with `/` are REPL commands, everything else is a question.

use faq_common::transcript::Transcript;
use faq_common::{respond, KnowledgeBase};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

use crate::render::Renderer;

/// What the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Empty,
    Question(String),
    /// `/N`: ask popular question N (1-based)
    PopularPick(usize),
    Popular,
    About,
    History,
    Help,
    Quit,
    Unknown(String),
}

/// Classify an input line. Questions are passed through untouched.
pub fn parse_line(raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Empty;
    }

    let Some(command) = trimmed.strip_prefix('/') else {
        return Line::Question(raw.to_string());
    };

    if let Ok(n) = command.parse::<usize>() {
        return Line::PopularPick(n);
    }

    match command.to_lowercase().as_str() {
        "popular" | "p" => Line::Popular,
        "about" => Line::About,
        "history" | "h" => Line::History,
        "help" | "?" => Line::Help,
        "quit" | "exit" | "q" => Line::Quit,
        _ => Line::Unknown(trimmed.to_string()),
    }
}

/// One chat session over a shared knowledge base
pub struct Session<'kb> {
    kb: &'kb KnowledgeBase,
    renderer: Renderer,
    transcript: Transcript,
}

impl<'kb> Session<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, renderer: Renderer) -> Self {
        let transcript = Transcript::new();
        info!(session = %transcript.session_id, "Chat session started");
        Self {
            kb,
            renderer,
            transcript,
        }
    }

    /// Answer `question` and record both turns
    pub fn ask(&mut self, question: &str) -> String {
        let response = respond(question, self.kb);
        debug!(source = %response.source, "Question answered");
        self.transcript.push_exchange(question, response.text);
        response.text.to_string()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }

    /// Run until `/quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R, out: &mut dyn Write) -> io::Result<()> {
        let kb = self.kb;
        let meta = kb.meta();
        self.renderer.banner(out, meta)?;

        let mut lines = input.lines();
        loop {
            self.renderer.prompt(out, meta)?;

            let raw = match lines.next() {
                Some(Ok(line)) => line,
                // A line that is not UTF-8 is consumed; skip it and keep going
                Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(error = %e, "Skipping unreadable input line");
                    writeln!(out, "Error reading input: {}", e)?;
                    continue;
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Input closed with an error");
                    return Err(e);
                }
                None => {
                    writeln!(out)?;
                    break;
                }
            };

            match parse_line(&raw) {
                Line::Empty => continue,
                Line::Question(q) => {
                    let reply = self.ask(&q);
                    self.renderer.answer(out, &reply)?;
                }
                Line::PopularPick(n) => match kb.popular_question(n) {
                    Some(q) => {
                        writeln!(out, "{}", q)?;
                        let reply = self.ask(q);
                        self.renderer.answer(out, &reply)?;
                    }
                    None => writeln!(
                        out,
                        "No popular question #{} (try /popular).",
                        n
                    )?,
                },
                Line::Popular => self.renderer.popular(out, meta)?,
                Line::About => self.renderer.about(out, meta)?,
                Line::History => self.renderer.history(out, &self.transcript)?,
                Line::Help => print_help(out)?,
                Line::Quit => break,
                Line::Unknown(cmd) => writeln!(out, "Unknown command {} (try /help).", cmd)?,
            }
        }

        info!(
            session = %self.transcript.session_id,
            questions = self.transcript.questions_asked(),
            "Chat session ended"
        );
        Ok(())
    }
}

fn print_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  /popular    list popular questions")?;
    writeln!(out, "  /N          ask popular question N")?;
    writeln!(out, "  /about      about DigiSkills.PK")?;
    writeln!(out, "  /history    show this conversation")?;
    writeln!(out, "  /quit       leave")
}

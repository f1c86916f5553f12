//! faqctl - terminal client for the DigiSkills.PK FAQ assistant
//!
//! The binary is a thin caller around `faq_common`: it parses flags,
//! loads config and the knowledge base, and renders answers. The
//! transcript lives here, never in the responder.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod repl;

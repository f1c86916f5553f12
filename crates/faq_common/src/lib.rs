//! FAQ Common - knowledge base and responder for the DigiSkills.PK FAQ assistant
//!
//! The core is one pure function, [`answer`], over an immutable
//! [`KnowledgeBase`]. Callers own everything stateful, including the
//! [`Transcript`].

pub mod config;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod responder;
pub mod transcript;

pub use config::FaqConfig;
pub use error::{FaqError, Result};
pub use intent::{Intent, DEFAULT_RESPONSE};
pub use knowledge::{Category, FaqEntry, KnowledgeBase, KnowledgeMeta};
pub use responder::{answer, respond, AnswerSource, Response};
pub use transcript::{Role, Transcript, Turn};

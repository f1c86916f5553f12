//! Knowledge base: ordered categories of question/answer entries.
//!
//! Order is part of the data. The responder walks categories in file order
//! and entries in file order, and the first entry with a shared keyword
//! wins, so the structure is a `Vec` all the way down and never a map.
//!
//! A knowledge base is built once at startup and is read-only afterwards.
//! Every constructor goes through [`KnowledgeBase::from_file`], which
//! enforces:
//! - at least one category
//! - every category has a name and at least one entry
//! - every entry has a non-blank question and answer

use crate::error::{FaqError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Knowledge base shipped with the binary
const BUILTIN_KB: &str = include_str!("../knowledge/digiskills.toml");

// =============================================================================
// On-disk shape
// =============================================================================

/// Knowledge file as written by humans (TOML or JSON).
///
/// Fields default to empty so a missing `question`/`answer` surfaces as a
/// [`FaqError::MissingField`] naming the entry instead of a parser error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeFile {
    pub title: String,
    pub subtitle: String,
    pub prompt: String,
    pub website: String,
    pub about: String,
    pub popular_questions: Vec<String>,
    pub categories: Vec<CategoryFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFile {
    pub name: String,
    pub entries: Vec<EntryFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryFile {
    pub question: String,
    pub answer: String,
}

// =============================================================================
// Validated model
// =============================================================================

/// One question/answer pair.
///
/// The question is never compared as a whole: it is lowercased and split on
/// whitespace into keywords once, at construction. Stopwords, duplicates
/// and punctuation stay in the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    question: String,
    answer: String,
    keywords: Vec<String>,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        let question = question.into();
        let keywords = tokenize(&question);
        Self {
            question,
            answer: answer.into(),
            keywords,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword (in question order) found inside `normalized`.
    /// `normalized` must already be lowercase.
    pub fn first_trigger(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| normalized.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Lowercase and split on whitespace. No filtering of any kind.
pub fn tokenize(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Named, ordered group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    entries: Vec<FaqEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>, entries: Vec<FaqEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }
}

/// Presentation text carried next to the categories. The matcher never
/// looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeMeta {
    pub title: String,
    pub subtitle: String,
    pub prompt: String,
    pub website: String,
    pub about: String,
    pub popular_questions: Vec<String>,
}

/// Location of an entry in match order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef<'a> {
    pub category: &'a str,
    /// Zero-based position inside its category
    pub index: usize,
    pub entry: &'a FaqEntry,
}

/// Immutable, validated knowledge base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    categories: Vec<Category>,
    meta: KnowledgeMeta,
}

impl KnowledgeBase {
    /// The DigiSkills.PK knowledge base embedded at build time
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_KB)
    }

    /// Load from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match ext.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(FaqError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let contents = fs::read_to_string(path).map_err(|source| FaqError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let kb = parse(&contents)?;

        info!(
            path = %path.display(),
            categories = kb.categories.len(),
            entries = kb.len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: KnowledgeFile = toml::from_str(s)?;
        Self::from_file(file)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let file: KnowledgeFile = serde_json::from_str(s)?;
        Self::from_file(file)
    }

    /// Validate a parsed knowledge file
    pub fn from_file(file: KnowledgeFile) -> Result<Self> {
        if file.categories.is_empty() {
            return Err(FaqError::EmptyKnowledgeBase);
        }

        let mut categories = Vec::with_capacity(file.categories.len());
        for (index, raw) in file.categories.into_iter().enumerate() {
            if raw.name.trim().is_empty() {
                return Err(FaqError::UnnamedCategory { index });
            }
            if raw.entries.is_empty() {
                return Err(FaqError::EmptyCategory { category: raw.name });
            }

            let mut entries = Vec::with_capacity(raw.entries.len());
            for (entry, e) in raw.entries.into_iter().enumerate() {
                if e.question.trim().is_empty() {
                    return Err(FaqError::MissingField {
                        category: raw.name,
                        entry,
                        field: "question",
                    });
                }
                if e.answer.trim().is_empty() {
                    return Err(FaqError::MissingField {
                        category: raw.name,
                        entry,
                        field: "answer",
                    });
                }
                entries.push(FaqEntry::new(e.question, e.answer));
            }

            debug!(category = %raw.name, entries = entries.len(), "Category validated");
            categories.push(Category::new(raw.name, entries));
        }

        Ok(Self {
            categories,
            meta: KnowledgeMeta {
                title: file.title,
                subtitle: file.subtitle,
                prompt: file.prompt,
                website: file.website,
                about: file.about,
                popular_questions: file.popular_questions,
            },
        })
    }

    /// Build from already-constructed categories (no metadata)
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        let file = KnowledgeFile {
            categories: categories
                .into_iter()
                .map(|c| CategoryFile {
                    name: c.name,
                    entries: c
                        .entries
                        .into_iter()
                        .map(|e| EntryFile {
                            question: e.question,
                            answer: e.answer,
                        })
                        .collect(),
                })
                .collect(),
            ..KnowledgeFile::default()
        };
        Self::from_file(file)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Case-insensitive category lookup
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Every entry in match order
    pub fn entries(&self) -> impl Iterator<Item = EntryRef<'_>> {
        self.categories.iter().flat_map(|c| {
            c.entries.iter().enumerate().map(move |(index, entry)| EntryRef {
                category: c.name.as_str(),
                index,
                entry,
            })
        })
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Always false for a validated knowledge base
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn meta(&self) -> &KnowledgeMeta {
        &self.meta
    }

    /// Popular question by 1-based number, as shown to users
    pub fn popular_question(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.meta.popular_questions.get(i))
            .map(String::as_str)
    }
}

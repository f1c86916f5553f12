//! Fallback intents, tried only when no knowledge base entry matched.
//!
//! Rules are evaluated top to bottom and the first rule with any phrase
//! contained in the normalized input wins. Phrases are plain substrings,
//! so "hi" also fires inside "this" and "see you" needs the space.

use serde::{Deserialize, Serialize};

/// Returned when neither the knowledge base nor any intent matched
pub const DEFAULT_RESPONSE: &str = "I'm sorry, I don't have information about that. Could you please ask about DigiSkills.PK courses, registration process, or certificates? For more specific queries, please visit the official DigiSkills.PK website.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Gratitude,
    Farewell,
    CourseInterest,
    RegistrationInterest,
}

/// Fallback rules in priority order
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hello", "hi", "hey", "greetings"]),
    (Intent::Gratitude, &["thank", "thanks", "appreciate"]),
    (Intent::Farewell, &["bye", "goodbye", "see you"]),
    (Intent::CourseInterest, &["course", "courses", "learn"]),
    (Intent::RegistrationInterest, &["register", "sign up", "join"]),
];

impl Intent {
    pub fn response(&self) -> &'static str {
        match self {
            Intent::Greeting => {
                "Hello! Welcome to DigiSkills.PK FAQ chatbot. How can I help you today?"
            }
            Intent::Gratitude => {
                "You're welcome! Is there anything else you'd like to know about DigiSkills.PK?"
            }
            Intent::Farewell => {
                "Thank you for chatting with me. Goodbye and best of luck with your DigiSkills journey!"
            }
            Intent::CourseInterest => {
                "DigiSkills.PK offers various digital skills courses. Would you like to know about specific courses like Freelancing, Digital Marketing, or WordPress?"
            }
            Intent::RegistrationInterest => {
                "You can register at the DigiSkills.PK website. Do you need help with the registration process?"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Gratitude => "gratitude",
            Intent::Farewell => "farewell",
            Intent::CourseInterest => "course_interest",
            Intent::RegistrationInterest => "registration_interest",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// First intent whose phrase list hits `normalized` (already lowercase)
pub fn detect(normalized: &str) -> Option<Intent> {
    INTENT_RULES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| normalized.contains(p)))
        .map(|(intent, _)| *intent)
}

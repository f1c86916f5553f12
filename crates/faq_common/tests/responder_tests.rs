//! Responder cascade tests.
//!
//! Covers totality, determinism, first-match priority and each fallback
//! rule, plus the permissive stopword behaviour of the shipped knowledge
//! base, which is pinned here on purpose.

use faq_common::knowledge::{Category, FaqEntry, KnowledgeBase};
use faq_common::responder::{answer, normalize, respond, AnswerSource, MAX_INPUT_BYTES};
use faq_common::{Intent, DEFAULT_RESPONSE};

fn builtin() -> KnowledgeBase {
    KnowledgeBase::builtin().expect("builtin knowledge base must be valid")
}

fn faq_answer(kb: &KnowledgeBase, category: &str, index: usize) -> String {
    kb.category(category).unwrap().entries()[index]
        .answer()
        .to_string()
}

/// Knowledge base whose keywords never occur in the fallback phrases
fn isolated_kb() -> KnowledgeBase {
    KnowledgeBase::from_categories(vec![Category::new(
        "misc",
        vec![FaqEntry::new("Xylophone zebra?", "Percussion.")],
    )])
    .unwrap()
}

// ============================================================================
// Totality and determinism
// ============================================================================

#[test]
fn test_answer_is_total() {
    let kb = builtin();
    let inputs = vec![
        String::new(),
        "   ".to_string(),
        "\t\n".to_string(),
        "¿Qué cursos hay?".to_string(),
        "ڈیجی سکلز کیا ہے".to_string(),
        "🤖🤖🤖".to_string(),
        "x".repeat(10_000),
        "ü".repeat(MAX_INPUT_BYTES),
        "z".repeat(MAX_INPUT_BYTES * 2),
    ];

    for input in inputs {
        let a = answer(&input, &kb);
        assert!(!a.is_empty(), "empty answer for input of len {}", input.len());
    }
}

#[test]
fn test_empty_and_blank_input_fall_to_default() {
    let kb = builtin();
    assert_eq!(answer("", &kb), DEFAULT_RESPONSE);
    assert_eq!(answer("   ", &kb), DEFAULT_RESPONSE);
    assert_eq!(respond("", &kb).source, AnswerSource::Default);
}

#[test]
fn test_answer_is_deterministic() {
    let kb = builtin();
    for input in ["what is digiskills", "hey", "ok bye", "xyzzy plugh", ""] {
        let first = answer(input, &kb);
        for _ in 0..10 {
            assert_eq!(answer(input, &kb), first);
        }
    }
}

#[test]
fn test_long_input_matches_within_cap() {
    let kb = builtin();
    let mut input = "z".repeat(9_990);
    input.push_str(" bye");
    assert_eq!(answer(&input, &kb), Intent::Farewell.response());
}

#[test]
fn test_keyword_beyond_cap_is_ignored() {
    let kb = builtin();
    let mut input = "z".repeat(MAX_INPUT_BYTES);
    input.push_str(" bye");
    assert!(normalize(&input).len() <= MAX_INPUT_BYTES);
    assert_eq!(answer(&input, &kb), DEFAULT_RESPONSE);
}

// ============================================================================
// Knowledge base matching
// ============================================================================

#[test]
fn test_first_match_priority() {
    let kb = builtin();
    let r = respond("what is digiskills", &kb);
    assert_eq!(r.text, faq_answer(&kb, "general", 0));
    assert!(matches!(
        r.source,
        AnswerSource::Faq { ref category, index: 0, ref keyword }
            if category == "general" && keyword == "what"
    ));
}

#[test]
fn test_earlier_entry_wins_over_later_category() {
    let kb = KnowledgeBase::from_categories(vec![
        Category::new("general", vec![FaqEntry::new("What is it?", "General answer.")]),
        Category::new(
            "courses",
            vec![FaqEntry::new("What courses exist?", "Courses answer.")],
        ),
    ])
    .unwrap();

    assert_eq!(answer("what courses", &kb), "General answer.");
    // "courses" alone only hits the second category
    assert_eq!(answer("courses", &kb), "Courses answer.");
}

#[test]
fn test_no_scoring_by_overlap_count() {
    let kb = KnowledgeBase::from_categories(vec![Category::new(
        "c",
        vec![
            FaqEntry::new("alpha", "One keyword."),
            FaqEntry::new("alpha beta gamma", "Three keywords."),
        ],
    )])
    .unwrap();
    assert_eq!(answer("alpha beta gamma", &kb), "One keyword.");
}

#[test]
fn test_keyword_substring_join_question() {
    let kb = builtin();
    let r = respond("hi, can I join the freelancing course?", &kb);
    assert_eq!(r.text, faq_answer(&kb, "general", 1));
    assert_ne!(r.text, Intent::RegistrationInterest.response());
    assert_ne!(r.text, Intent::Greeting.response());
}

#[test]
fn test_matching_is_case_insensitive() {
    let kb = builtin();
    assert_eq!(
        answer("WHAT IS DIGISKILLS", &kb),
        answer("what is digiskills", &kb)
    );
}

#[test]
fn test_question_punctuation_stays_in_keyword() {
    let kb = KnowledgeBase::from_categories(vec![Category::new(
        "c",
        vec![FaqEntry::new("Zebra?", "Stripes.")],
    )])
    .unwrap();
    assert_eq!(answer("zebra", &kb), DEFAULT_RESPONSE);
    assert_eq!(answer("a zebra? yes", &kb), "Stripes.");
}

// ============================================================================
// Fallback intents
// ============================================================================

#[test]
fn test_greeting_fallback() {
    let kb = builtin();
    assert_eq!(answer("hey", &kb), Intent::Greeting.response());
    assert_eq!(answer("Hello!", &kb), Intent::Greeting.response());
    assert_eq!(answer("hey there", &isolated_kb()), Intent::Greeting.response());
}

#[test]
fn test_farewell_fallback() {
    let kb = builtin();
    assert_eq!(answer("ok bye", &kb), Intent::Farewell.response());
    assert_eq!(answer("goodbye", &kb), Intent::Farewell.response());
}

#[test]
fn test_course_interest_fallback() {
    let kb = isolated_kb();
    let r = respond("course", &kb);
    assert_eq!(r.text, Intent::CourseInterest.response());
    assert_eq!(
        r.source,
        AnswerSource::Intent {
            intent: Intent::CourseInterest
        }
    );
}

#[test]
fn test_fallbacks_without_overlap() {
    let kb = isolated_kb();
    assert_eq!(answer("thanks a lot", &kb), Intent::Gratitude.response());
    assert_eq!(answer("see you", &kb), Intent::Farewell.response());
    assert_eq!(answer("courses please", &kb), Intent::CourseInterest.response());
    assert_eq!(answer("sign up please", &kb), Intent::RegistrationInterest.response());
    assert_eq!(answer("i'd like to join", &kb), Intent::RegistrationInterest.response());
}

#[test]
fn test_default_fallback() {
    let kb = builtin();
    assert_eq!(answer("xyzzy plugh", &kb), DEFAULT_RESPONSE);
    assert_eq!(answer("zzz", &isolated_kb()), DEFAULT_RESPONSE);
}

// ============================================================================
// Pinned quirks of the shipped knowledge base
// ============================================================================

/// "the" from "Are the courses really free?" fires inside "there"
#[test]
fn test_quirk_hey_there_hits_faq_not_greeting() {
    let kb = builtin();
    let r = respond("hey there", &kb);
    assert_eq!(r.text, faq_answer(&kb, "general", 2));
    assert!(matches!(r.source, AnswerSource::Faq { ref keyword, .. } if keyword == "the"));
}

/// The single-letter keyword "i" fires for "hi"
#[test]
fn test_quirk_hi_hits_registration() {
    let kb = builtin();
    assert_eq!(answer("hi", &kb), faq_answer(&kb, "registration", 0));
}

/// Gratitude phrases always hit a stopword keyword first
#[test]
fn test_quirk_gratitude_unreachable_with_builtin() {
    let kb = builtin();
    let certificate = faq_answer(&kb, "courses", 2);
    // "a" from "Will I get a certificate after completing a course?"
    assert_eq!(answer("thanks", &kb), certificate);
    assert_eq!(answer("thank", &kb), certificate);
    // "i" from "How do I register for DigiSkills.PK?"
    assert_eq!(answer("appreciate", &kb), faq_answer(&kb, "registration", 0));

    for input in ["thanks", "thank", "appreciate"] {
        assert_ne!(answer(input, &kb), Intent::Gratitude.response());
    }
}

/// Course interest never fires: every course phrase hits an entry first
#[test]
fn test_quirk_course_interest_unreachable_with_builtin() {
    let kb = builtin();
    let r = respond("course", &kb);
    assert_eq!(r.text, faq_answer(&kb, "technical", 1));
    assert!(matches!(r.source, AnswerSource::Faq { ref keyword, .. } if keyword == "course"));
    // "courses" from "Are the courses really free?"
    assert_eq!(answer("courses", &kb), faq_answer(&kb, "general", 2));
    // "a" inside "le-a-rn"
    assert_eq!(answer("learn", &kb), faq_answer(&kb, "courses", 2));

    for input in ["course", "courses", "learn"] {
        assert_ne!(answer(input, &kb), Intent::CourseInterest.response());
    }
}

#[test]
fn test_quirk_register_fallback_shadowed_by_faq() {
    let kb = builtin();
    // "is" inside "reg-is-ter"
    assert_eq!(answer("register", &kb), faq_answer(&kb, "general", 0));
    assert_eq!(answer("join", &kb), faq_answer(&kb, "general", 1));
    assert_ne!(answer("sign up", &kb), Intent::RegistrationInterest.response());
}

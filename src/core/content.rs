use serde_json::{json, Value};
use crate::models::SectionType;

/// Placeholder text for content not written yet
pub const PLACEHOLDER: &str = "Coming soon...";

/// Derive a URL slug from a title
///
/// Lowercases ASCII letters and digits, collapses every other run of
/// characters into a single `-`, and trims dashes at both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Content of a learning page before it is stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewLearningPage {
    pub page_number: i32,
    pub sections: Vec<NewSection>,
    pub fun_facts: Vec<NewFunFact>,
    pub day_in_life: Option<Value>,
    pub scenarios: Vec<NewScenario>,
    pub reflections: Vec<NewReflection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSection {
    pub section_type: SectionType,
    pub content: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFunFact {
    pub title: String,
    pub fact_text: String,
    pub takeaway: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewScenario {
    pub question: String,
    pub options: [String; 3],
    pub correct_option: char,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReflection {
    pub question_text: String,
    pub options: [String; 3],
}

fn placeholder_triple() -> [String; 3] {
    [PLACEHOLDER.to_string(), PLACEHOLDER.to_string(), PLACEHOLDER.to_string()]
}

/// First learning page given to every new career track
///
/// All five sections in display order, two fun facts, a day-in-life
/// narrative, two scenarios and one reflection, each holding placeholder
/// text until real content is written.
pub fn starter_page() -> NewLearningPage {
    let sections = SectionType::ALL
        .iter()
        .enumerate()
        .map(|(order, section_type)| NewSection {
            section_type: *section_type,
            content: PLACEHOLDER.to_string(),
            order: order as i32,
        })
        .collect();

    let fun_facts = ["Did You Know?", "Interesting Fact"]
        .iter()
        .map(|title| NewFunFact {
            title: title.to_string(),
            fact_text: PLACEHOLDER.to_string(),
            takeaway: PLACEHOLDER.to_string(),
        })
        .collect();

    let scenarios = (0..2)
        .map(|_| NewScenario {
            question: PLACEHOLDER.to_string(),
            options: placeholder_triple(),
            correct_option: 'A',
            explanation: PLACEHOLDER.to_string(),
        })
        .collect();

    NewLearningPage {
        page_number: 1,
        sections,
        fun_facts,
        day_in_life: Some(json!({
            "morning": PLACEHOLDER,
            "afternoon": PLACEHOLDER,
            "evening": PLACEHOLDER,
        })),
        scenarios,
        reflections: vec![NewReflection {
            question_text: PLACEHOLDER.to_string(),
            options: placeholder_triple(),
        }],
    }
}

use serde::{Deserialize, Serialize};

/// A vocabulary entry. `english` is the identifier learning records are keyed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub english: String,
    #[serde(default)]
    pub chinese: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_tips: Option<String>,
    /// 1 (basic) to 5 (advanced)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    /// Part of speech, e.g. "noun"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Word {
    pub fn new(english: impl Into<String>, chinese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            chinese: chinese.into(),
            examples: Vec::new(),
            usage_tips: None,
            difficulty: None,
            category: None,
        }
    }
}

/// Which words a study session draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    /// Words whose review is due
    #[default]
    Due,
    /// Words that have never been rated
    New,
    /// Every word in the list
    All,
}

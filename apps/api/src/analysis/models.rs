use serde::{Deserialize, Serialize};

/// Semantic role of the text block being scored. Selects the rule bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    Summary,
    Experience,
    Skills,
    Education,
}

impl FieldCategory {
    pub const ALL: [FieldCategory; 4] = [
        FieldCategory::Summary,
        FieldCategory::Experience,
        FieldCategory::Skills,
        FieldCategory::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::Summary => "summary",
            FieldCategory::Experience => "experience",
            FieldCategory::Skills => "skills",
            FieldCategory::Education => "education",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub text: String,
    pub field_category: FieldCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readability {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Readability {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 90 => Readability::Excellent,
            s if s >= 75 => Readability::Good,
            s if s >= 50 => Readability::Fair,
            _ => Readability::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => Impact::High,
            s if s >= 60 => Impact::Medium,
            _ => Impact::Low,
        }
    }
}

/// Snapshot of one scoring run. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,                // 0 – 100
    pub suggestions: Vec<String>, // rule execution order
    pub keywords: Vec<String>,    // rule execution order
    pub readability: Readability,
    pub impact: Impact,
    pub industry_match: u8, // score + bounded perturbation, ≤ 100
}

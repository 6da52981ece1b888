//! Category module - the fixed set of question classification tags

use serde::{Deserialize, Serialize};

/// Classification tag for an interview question
///
/// The set is closed: exactly these 7 categories exist and they are never
/// extended at runtime. The variant order is the fixed priority order used
/// everywhere in the pipeline: more discriminating categories first, so that
/// a score tie between e.g. `Coding` and `Behavioral` resolves to `Coding`.
/// The derived `Ord` and `BTreeMap` iteration follow the same order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Programming problems, algorithms, data structures
    Coding,

    /// Database queries and SQL-specific problems
    Sql,

    /// Architecture, scalability, design problems
    SystemDesign,

    /// Technology-specific questions (languages, frameworks, tooling)
    Technical,

    /// Questions about previous projects and technical decisions
    Project,

    /// Personal experience, soft skills, situational questions
    Behavioral,

    /// Company-specific, salary, notice period, career goals
    Hr,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 7] = [
        Category::Coding,
        Category::Sql,
        Category::SystemDesign,
        Category::Technical,
        Category::Project,
        Category::Behavioral,
        Category::Hr,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coding => "coding",
            Category::Sql => "sql",
            Category::SystemDesign => "system_design",
            Category::Technical => "technical",
            Category::Project => "project",
            Category::Behavioral => "behavioral",
            Category::Hr => "hr",
        }
    }

    /// Human-readable heading used in text reports
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Coding => "CODING & ALGORITHM QUESTIONS",
            Category::Sql => "SQL & DATABASE QUESTIONS",
            Category::SystemDesign => "SYSTEM DESIGN QUESTIONS",
            Category::Technical => "TECHNICAL QUESTIONS",
            Category::Project => "PROJECT EXPERIENCE QUESTIONS",
            Category::Behavioral => "BEHAVIORAL QUESTIONS",
            Category::Hr => "HR & COMPANY QUESTIONS",
        }
    }

    /// Parse a category from a string
    ///
    /// Accepts both the bare name (`"coding"`) and the suffixed key form the
    /// AI model was historically prompted with (`"coding_questions"`).
    pub fn parse(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase();
        let name = name.strip_suffix("_questions").unwrap_or(&name);
        match name {
            "coding" => Some(Category::Coding),
            "sql" => Some(Category::Sql),
            "system_design" => Some(Category::SystemDesign),
            "technical" => Some(Category::Technical),
            "project" => Some(Category::Project),
            "behavioral" => Some(Category::Behavioral),
            "hr" => Some(Category::Hr),
            _ => None,
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

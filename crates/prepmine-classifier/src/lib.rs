//! Prepmine Keyword Classifier
//!
//! Maps a question string to one of the 7 fixed categories using weighted
//! case-insensitive substring matching. Pure and deterministic: the same
//! input always yields the same category, with no external calls.
//!
//! This is both the fallback classification path and the relevance signal
//! the quality filter uses to catch off-topic AI output. Scoring is
//! intentionally simple: sum the weights of every keyword found as a
//! substring, take the strictly highest category, break ties by the fixed
//! priority order (`coding > sql > system_design > technical > project >
//! behavioral > hr`), and default to `behavioral` when nothing matches.
//! Multi-word phrases carry higher weights than single terms because they
//! are more discriminating.

#![warn(missing_docs)]
#![warn(clippy::all)]

use prepmine_domain::Category;

/// Weighted keywords for the coding category
const CODING_KEYWORDS: &[(&str, u32)] = &[
    ("algorithm", 2),
    ("data structure", 3),
    ("array", 2),
    ("linked list", 3),
    ("binary tree", 3),
    ("binary search", 3),
    ("graph", 2),
    ("dynamic programming", 3),
    ("recursion", 2),
    ("sorting", 2),
    ("searching", 1),
    ("leetcode", 3),
    ("coding problem", 3),
    ("write code", 3),
    ("implement", 2),
    ("two sum", 3),
    ("palindrome", 3),
    ("subset", 2),
    ("backtracking", 3),
    ("coin change", 3),
    ("string manipulation", 3),
    ("time complexity", 3),
    ("big o", 2),
    ("dfs", 2),
    ("bfs", 2),
];

/// Weighted keywords for the sql category
const SQL_KEYWORDS: &[(&str, u32)] = &[
    ("sql query", 3),
    ("database query", 3),
    ("join", 2),
    ("inner join", 3),
    ("outer join", 3),
    ("select", 2),
    ("where clause", 3),
    ("group by", 3),
    ("order by", 3),
    ("having", 2),
    ("subquery", 3),
    ("stored procedure", 3),
    ("trigger", 2),
    ("normalization", 2),
    ("index", 2),
    ("second highest salary", 3),
    ("nth highest", 3),
    ("duplicate records", 2),
];

/// Weighted keywords for the system design category
const SYSTEM_DESIGN_KEYWORDS: &[(&str, u32)] = &[
    ("system design", 3),
    ("design a", 2),
    ("scalab", 2),
    ("high availability", 3),
    ("load balanc", 3),
    ("distributed system", 3),
    ("microservice", 2),
    ("chat application", 3),
    ("notification system", 3),
    ("url shortener", 3),
    ("rate limiter", 3),
    ("message queue", 3),
    ("sharding", 3),
    ("caching strategy", 3),
];

/// Weighted keywords for the technical category
const TECHNICAL_KEYWORDS: &[(&str, u32)] = &[
    ("javascript", 2),
    ("python", 2),
    ("java", 1),
    ("sql", 1),
    ("database", 1),
    ("mysql", 2),
    ("mongodb", 2),
    ("react", 2),
    ("node", 1),
    ("express", 1),
    ("aws", 2),
    ("linux", 2),
    ("security", 1),
    ("json", 2),
    ("oop", 2),
    ("dbms", 2),
    ("operating system", 2),
    ("design pattern", 2),
    ("tech stack", 2),
    ("framework", 1),
    ("rest api", 2),
    ("api", 1),
    ("dependency injection", 3),
    ("closure", 2),
    ("garbage collect", 2),
];

/// Weighted keywords for the project category
const PROJECT_KEYWORDS: &[(&str, u32)] = &[
    ("previous project", 3),
    ("last project", 3),
    ("current project", 3),
    ("your project", 3),
    ("project architecture", 3),
    ("project challenges", 3),
    ("technologies used", 3),
    ("project timeline", 3),
    ("project team", 3),
    ("project outcome", 3),
    ("walk me through your", 2),
];

/// Weighted keywords for the behavioral category
const BEHAVIORAL_KEYWORDS: &[(&str, u32)] = &[
    ("tell me about", 2),
    ("tell me about yourself", 3),
    ("a time when", 3),
    ("a time you", 3),
    ("conflict", 2),
    ("leadership", 2),
    ("strength", 2),
    ("weakness", 2),
    ("motivat", 1),
    ("difficult situation", 3),
    ("achievement", 2),
    ("failure", 2),
    ("time management", 2),
    ("problem solving", 1),
    ("communication", 1),
    ("team", 1),
    ("disagree", 2),
];

/// Weighted keywords for the hr category
const HR_KEYWORDS: &[(&str, u32)] = &[
    ("salary", 3),
    ("notice period", 3),
    ("why do you want", 2),
    ("why are you leaving", 3),
    ("career goals", 3),
    ("company", 2),
    ("expectations", 2),
    ("relocate", 2),
    ("benefits", 2),
    ("work life balance", 3),
    ("long term goals", 3),
    ("where do you see yourself", 3),
];

/// Keyword table for a category
fn keywords_for(category: Category) -> &'static [(&'static str, u32)] {
    match category {
        Category::Coding => CODING_KEYWORDS,
        Category::Sql => SQL_KEYWORDS,
        Category::SystemDesign => SYSTEM_DESIGN_KEYWORDS,
        Category::Technical => TECHNICAL_KEYWORDS,
        Category::Project => PROJECT_KEYWORDS,
        Category::Behavioral => BEHAVIORAL_KEYWORDS,
        Category::Hr => HR_KEYWORDS,
    }
}

/// Score the question against every category, in priority order
///
/// A category's score is the sum of weights of its keywords found as
/// case-insensitive substrings of the question.
pub fn scores(question: &str) -> [(Category, u32); 7] {
    let lowered = question.to_lowercase();
    let mut result = [(Category::Coding, 0u32); 7];
    for (slot, category) in result.iter_mut().zip(Category::ALL) {
        let score = keywords_for(category)
            .iter()
            .filter(|(kw, _)| lowered.contains(kw))
            .map(|(_, w)| w)
            .sum();
        *slot = (category, score);
    }
    result
}

/// The question's highest category score
pub fn max_score(question: &str) -> u32 {
    scores(question).iter().map(|(_, s)| *s).max().unwrap_or(0)
}

/// Classify a question into exactly one category
///
/// The strictly highest score wins; ties resolve to the category earlier in
/// the priority order, and an all-zero score defaults to `Behavioral`.
pub fn classify(question: &str) -> Category {
    let mut best = Category::Behavioral;
    let mut best_score = 0u32;
    for (category, score) in scores(question) {
        if score > best_score {
            best = category;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let q = "Explain how you would design a scalable chat application";
        let first = classify(q);
        for _ in 0..10 {
            assert_eq!(classify(q), first);
        }
    }

    #[test]
    fn test_join_and_select_is_sql() {
        assert_eq!(classify("join and select"), Category::Sql);
    }

    #[test]
    fn test_coding_signals() {
        assert_eq!(
            classify("What sorting algorithm would you use for nearly sorted data"),
            Category::Coding
        );
        assert_eq!(
            classify("Implement a function to detect a cycle in a linked list"),
            Category::Coding
        );
    }

    #[test]
    fn test_sql_beats_technical_on_query_questions() {
        // "sql" alone also scores for technical; the query phrasing must win
        assert_eq!(
            classify("Write a SQL query to find duplicate records in a table"),
            Category::Sql
        );
    }

    #[test]
    fn test_behavioral_signals() {
        assert_eq!(
            classify("Tell me about a time you disagreed with your manager"),
            Category::Behavioral
        );
    }

    #[test]
    fn test_system_design_signals() {
        assert_eq!(
            classify("How would you design a scalable notification system"),
            Category::SystemDesign
        );
    }

    #[test]
    fn test_hr_signals() {
        assert_eq!(
            classify("What are your salary expectations and notice period"),
            Category::Hr
        );
        assert_eq!(
            classify("Why do you want to join this company"),
            Category::Hr
        );
    }

    #[test]
    fn test_project_signals() {
        assert_eq!(
            classify("Explain the architecture of your last project and the technologies used"),
            Category::Project
        );
    }

    #[test]
    fn test_no_signal_defaults_to_behavioral() {
        assert_eq!(classify("Describe your morning routine"), Category::Behavioral);
        assert_eq!(max_score("Describe your morning routine"), 0);
    }

    #[test]
    fn test_tie_break_prefers_priority_order() {
        // "graph" (coding, 2) vs "trigger" (sql, 2): coding is earlier
        assert_eq!(classify("graph trigger"), Category::Coding);
    }

    #[test]
    fn test_scores_cover_all_categories() {
        let scored = scores("anything at all");
        assert_eq!(scored.len(), 7);
        let cats: Vec<Category> = scored.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, Category::ALL.to_vec());
    }
}

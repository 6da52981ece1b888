//! Prompt engineering for AI question extraction

use crate::types::Chunk;

/// Builds the extraction prompt for one chunk
pub struct PromptBuilder<'a> {
    chunk: &'a Chunk<'a>,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder for a chunk
    pub fn new(chunk: &'a Chunk<'a>) -> Self {
        Self { chunk }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Persona and extraction requirements
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The review texts
        prompt.push_str(&format!(
            "=== CHUNK {} INTERVIEWS ===\n\n",
            self.chunk.index + 1
        ));
        for (i, review) in self.chunk.reviews.iter().enumerate() {
            prompt.push_str(&review.prompt_text(i));
            prompt.push('\n');
        }

        // 3. Category definitions
        prompt.push_str(CATEGORY_DEFINITIONS);
        prompt.push_str("\n\n");

        // 4. Output format constraints
        prompt.push_str(OUTPUT_FORMAT);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "\
You are an expert interview analyst. Extract specific, actionable interview \
questions from the interview reviews below.

Requirements:
- Extract ONLY actual questions that were asked during interviews
- Focus on concrete questions candidates can prepare for, not generic statements
- Categorize each question accurately using the category definitions
- Include context when helpful (e.g. \"for 2+ years experience\")
- Each question must be between 15 and 300 characters
- Focus on quality over quantity";

const CATEGORY_DEFINITIONS: &str = "\
Categories:
- coding: programming problems, algorithms, data structures, coding challenges
- sql: database queries, SQL-specific problems
- system_design: architecture, scalability, design problems
- technical: technology-specific questions (languages, frameworks, databases, tooling)
- project: questions about previous projects and technical decisions
- behavioral: personal experience, soft skills, situational questions
- hr: company-specific, salary, notice period, career goals";

const OUTPUT_FORMAT: &str = r#"Output format (JSON object only, no additional text):
{
  "coding": ["Implement binary search over a sorted array"],
  "sql": ["Write a query to find the second highest salary"],
  "system_design": ["Design a scalable chat application"],
  "technical": ["Explain JavaScript closures with examples"],
  "project": ["Explain the architecture of your last project"],
  "behavioral": ["Tell me about a challenging project you worked on"],
  "hr": ["What are your salary expectations?"]
}

Every key must be present, with an empty array when no questions fit.
Remember: return ONLY valid JSON, no markdown code blocks, no explanations."#;

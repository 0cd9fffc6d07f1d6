//! Prompt templates for interview question generation and answer scoring

/// Prompt templates with `{placeholder}` substitution.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub question_generation: String,
    pub answer_evaluation: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            question_generation: QUESTION_GENERATION_TEMPLATE.to_string(),
            answer_evaluation: ANSWER_EVALUATION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_question_generation(&self, role_description: &str) -> String {
        self.question_generation.replace("{role}", role_description)
    }

    pub fn render_answer_evaluation(&self, question: &str, answer: &str) -> String {
        self.answer_evaluation
            .replace("{question}", question)
            .replace("{answer}", answer)
    }
}

const QUESTION_GENERATION_TEMPLATE: &str = r#"Generate interview questions for: {role}

Cover both technical depth and behavioral fit. Number each question and keep
the list focused on what the role actually requires."#;

const ANSWER_EVALUATION_TEMPLATE: &str = r#"Evaluate this answer:
Q: {question}
A: {answer}

Give a score out of 100, what was strong, and what to improve. Be concrete."#;

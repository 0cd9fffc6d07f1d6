//! Remote chat-completion service integration

pub mod groq;
pub mod prompts;

use crate::data::faq::FaqEntry;
use crate::error::Result;
use crate::matching::faq::find_answer;

/// Injected capability for anything the FAQ resolver can't answer.
/// Network and service failures surface as errors, never as a fabricated
/// answer.
pub trait ChatService {
    fn complete(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Where a resolved answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    Faq,
    Model,
}

#[derive(Debug, Clone)]
pub struct ResolvedAnswer {
    pub text: String,
    pub source: AnswerSource,
}

/// Answer `question` from the FAQ set when possible, falling back to the
/// chat service otherwise.
pub async fn resolve_question<S: ChatService>(
    question: &str,
    faqs: &[FaqEntry],
    service: &S,
) -> Result<ResolvedAnswer> {
    if let Some(answer) = find_answer(question, faqs) {
        return Ok(ResolvedAnswer {
            text: answer.to_string(),
            source: AnswerSource::Faq,
        });
    }

    let text = service.complete(question).await?;
    Ok(ResolvedAnswer {
        text,
        source: AnswerSource::Model,
    })
}

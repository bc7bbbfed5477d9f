pub mod handlers;
pub mod prompts;

use crate::cv::CvContext;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use prompts::build_chat_prompt;

/// Answers `question` from the CV context with a single model call.
///
/// Fails without calling the model when the CV never loaded.
pub async fn answer_question(
    cv: &CvContext,
    llm: &dyn TextGenerator,
    question: &str,
) -> Result<String, AppError> {
    let cv_text = cv
        .text()
        .map_err(|reason| AppError::ContextUnavailable(reason.to_string()))?;

    let prompt = build_chat_prompt(cv_text, question);

    llm.generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))
}

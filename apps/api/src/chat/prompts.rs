// Chat prompt templates.

/// The exact reply the model is told to give when the CV does not contain
/// the answer.
pub const REFUSAL_PHRASE: &str = "I cannot answer that based on the provided CV.";

/// Builds the single grounded prompt sent to the model.
pub fn build_chat_prompt(cv_context: &str, question: &str) -> String {
    format!(
        "Based ONLY on the following CV context, please answer the user's question.\n\
         If the answer cannot be found in the context, say '{REFUSAL_PHRASE}'\n\
         \n\
         ---\n\
         CV Context:\n\
         {cv_context}\n\
         ---\n\
         \n\
         User's Question:\n\
         {question}\n"
    )
}

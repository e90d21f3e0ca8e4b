use crate::consts;

/// Renders the tutoring instruction sent to the provider. The question is
/// embedded verbatim; the context section only appears when `context` has
/// non-whitespace content.
pub fn build_prompt(subject: &str, question: &str, context: Option<&str>) -> String {
    let mut prompt = format!(
        "{} {}. {}\n\n",
        consts::PROMPT_HEADER,
        subject,
        consts::PROMPT_INSTRUCTIONS
    );

    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(consts::PROMPT_CONTEXT_LABEL);
        prompt.push('\n');
        prompt.push_str(context);
        prompt.push_str("\n\n");
    }

    prompt.push_str(consts::PROMPT_QUESTION_LABEL);
    prompt.push('\n');
    prompt.push_str(question);
    prompt.push('\n');

    prompt
}

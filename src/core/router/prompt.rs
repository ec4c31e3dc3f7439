//! Prompt enrichment

use crate::core::types::RouteContext;

/// Wrap a prompt with the file, language and code context of the request
///
/// The language line is outermost, then the file line, then the prompt. A
/// `Code Context` fence is appended when the context carries content, tagged
/// with the language or `text`.
pub fn enhance(prompt: &str, context: &RouteContext) -> String {
    let mut enhanced = prompt.to_string();

    if let Some(filename) = context.filename.as_deref() {
        enhanced = format!("File: {}\n\n{}", filename, enhanced);
    }

    if let Some(language) = context.language.as_deref() {
        enhanced = format!("Language: {}\n\n{}", language, enhanced);
    }

    if let Some(content) = context.content.as_deref() {
        let tag = context.language.as_deref().unwrap_or("text");
        enhanced.push_str(&format!("\n\nCode Context:\n```{}\n{}\n```", tag, content));
    }

    enhanced
}

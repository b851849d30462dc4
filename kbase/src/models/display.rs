//! Presentation helpers shared by search results and the HTTP layer.

use super::document::ContentView;

/// Convert a kebab-case name to title case: `laravel-jetstream` becomes
/// `Laravel Jetstream`.
pub fn format_display_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate `text` to at most `max_chars` characters, marking truncation
/// with a trailing `...`.
pub fn summarize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let mut summary: String = text.chars().take(keep).collect();
    summary.push_str("...");
    summary
}

/// Collect the tags shown for a document.
///
/// The document type comes first, then declared tags, then the lowercased
/// framework, language and nested type. Duplicates keep their first position
/// and empty values are never emitted.
pub fn extract_tags(doc_type: &str, view: &ContentView) -> Vec<String> {
    let lowered = [&view.framework, &view.language, &view.content_type]
        .into_iter()
        .flatten()
        .map(|value| value.to_lowercase());

    let candidates = std::iter::once(doc_type.to_string())
        .chain(view.tags.iter().cloned())
        .chain(lowered);

    let mut tags: Vec<String> = Vec::new();
    for tag in candidates {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

//! JSON extraction from model reply text.
//!
//! The vision model is asked to answer with a bare JSON object but may wrap
//! it in prose or markdown code fences. The span-finding lives here as a
//! pure function so it can be tested against adversarial strings without a
//! live model call.

/// Extract the first JSON object embedded in `text`.
///
/// Tries a ```json fence first, then a bare ``` fence, then a greedy
/// first-`{` to last-`}` scan. Returns `None` when no candidate span
/// exists; the caller decides how to degrade. The returned span is not
/// guaranteed to parse.
pub fn extract_json_object(text: &str) -> Option<String> {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_marker = &trimmed[start + 7..];
        if let Some(end) = after_marker.find("```") {
            return Some(after_marker[..end].trim().to_string());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_marker = &trimmed[start + 3..];
        if let Some(end) = after_marker.find("```") {
            return Some(after_marker[..end].trim().to_string());
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if end > start {
            return Some(trimmed[start..=end].to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object() {
        let text = r#"{"valido": true}"#;
        assert_eq!(extract_json_object(text).as_deref(), Some(r#"{"valido": true}"#));
    }

    #[test]
    fn test_prose_wrapped_object() {
        let text = r#"Claro, aquí está el análisis: {"valido": true, "puntajeLineal": 7} ¡Espero que ayude!"#;
        assert_eq!(
            extract_json_object(text).as_deref(),
            Some(r#"{"valido": true, "puntajeLineal": 7}"#)
        );
    }

    #[test]
    fn test_json_code_fence() {
        let text = "```json\n{\"valido\": false}\n```";
        assert_eq!(extract_json_object(text).as_deref(), Some("{\"valido\": false}"));
    }

    #[test]
    fn test_plain_code_fence() {
        let text = "```\n{\"valido\": true}\n```";
        assert_eq!(extract_json_object(text).as_deref(), Some("{\"valido\": true}"));
    }

    #[test]
    fn test_no_braces() {
        assert_eq!(extract_json_object("No puedo analizar esta imagen."), None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn test_nested_braces() {
        let text = r#"{"a": {"b": 1}, "c": 2}"#;
        assert_eq!(extract_json_object(text).as_deref(), Some(text));
    }

    #[test]
    fn test_multiple_fragments_span_greedily() {
        // Greedy first-{/last-} covers both fragments. The span does not
        // parse as one object; downstream folds this into the fallback.
        let text = r#"{"a": 1} y también {"b": 2}"#;
        let span = extract_json_object(text).unwrap();
        assert_eq!(span, r#"{"a": 1} y también {"b": 2}"#);
        assert!(serde_json::from_str::<serde_json::Value>(&span).is_err());
    }

    #[test]
    fn test_unclosed_fence_falls_through_to_braces() {
        let text = "```json\n{\"valido\": true}";
        assert_eq!(extract_json_object(text).as_deref(), Some("{\"valido\": true}"));
    }

    #[test]
    fn test_reversed_braces_only() {
        assert_eq!(extract_json_object("} nada {"), None);
    }
}

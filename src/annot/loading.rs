//! Loading annotation documents from files
//!
//! String-based methods are the core functionality; file-based methods are
//! thin wrappers that read the file and dispatch on its extension
//! (`.yaml`/`.yml` to the YAML parser, everything else to JSON). Every loaded
//! document is validated before it is returned, so downstream code can rely
//! on the model invariants.

use std::fs;
use std::path::Path;

use crate::annot::document::Document;
use crate::annot::error::AnnotError;

/// Parse a JSON document source and validate it.
pub fn document_from_json(source: &str) -> Result<Document, AnnotError> {
    let document: Document = serde_json::from_str(source)
        .map_err(|e| AnnotError::Parse(format!("invalid JSON document: {}", e)))?;
    document.validate()?;
    Ok(document)
}

/// Parse a YAML document source and validate it.
pub fn document_from_yaml(source: &str) -> Result<Document, AnnotError> {
    let document: Document = serde_yaml::from_str(source)
        .map_err(|e| AnnotError::Parse(format!("invalid YAML document: {}", e)))?;
    document.validate()?;
    Ok(document)
}

/// Read a document file and parse it according to its extension.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document, AnnotError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .map_err(|e| AnnotError::Io(format!("failed to read {}: {}", path.display(), e)))?;

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => document_from_yaml(&source),
        _ => document_from_json(&source),
    };
    parsed.map_err(|e| match e {
        AnnotError::Parse(msg) => AnnotError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_parse_errors_are_reported_as_parse() {
        let err = document_from_json("{ not json").unwrap_err();
        assert!(matches!(err, AnnotError::Parse(_)));
    }

    #[test]
    fn minimal_document_round_trips_through_json() {
        let source = r#"{
            "sentences": [{
                "words": ["Hi", "."],
                "start_offsets": [0, 2],
                "end_offsets": [2, 3]
            }]
        }"#;
        let document = document_from_json(source).unwrap();
        assert_eq!(document.sentences.len(), 1);
        assert_eq!(document.sentences[0].words, vec!["Hi", "."]);
        assert!(document.sentences[0].lemmas.is_none());
        assert!(document.coref_chains.is_none());
    }
}

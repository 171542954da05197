//! The seam to the external annotation engine
//!
//! All linguistic processing (tokenization, tagging, parsing, coreference
//! resolution) lives behind the [`Annotator`] trait; this crate only consumes
//! the [`Document`] it returns. An annotator failure is fatal to the caller:
//! there are no retries and no partial results.

use crate::annot::document::Document;
use crate::annot::error::AnnotError;

/// An external annotation engine: one blocking, all-or-nothing batch call.
///
/// `preprocessed` tells the engine the text is already sentence-split and
/// tokenized; engines that do not support preprocessed input may ignore it.
pub trait Annotator {
    fn annotate(&self, text: &str, preprocessed: bool) -> Result<Document, AnnotError>;
}

/// An [`Annotator`] backed by a prepared document.
///
/// Holds the exact input text it annotates and the document an external
/// engine produced for it. Used by the `demo` subcommand and the integration
/// tests, where a real engine is out of scope; `annotate` refuses any other
/// text so a fixture can never be presented as the annotation of the wrong
/// input.
#[derive(Debug, Clone)]
pub struct CannedAnnotator {
    text: String,
    document: Document,
}

impl CannedAnnotator {
    pub fn new(text: impl Into<String>, document: Document) -> Self {
        CannedAnnotator {
            text: text.into(),
            document,
        }
    }

    /// The input text this annotator has a prepared document for.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Annotator for CannedAnnotator {
    fn annotate(&self, text: &str, _preprocessed: bool) -> Result<Document, AnnotError> {
        if text != self.text {
            return Err(AnnotError::Annotator(format!(
                "no prepared annotation for input {:?} (expected {:?})",
                text, self.text
            )));
        }
        Ok(self.document.clone())
    }
}

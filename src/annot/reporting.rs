//! Report rendering for annotation documents
//!
//! Walks a [`Document`] top-down and emits one line of text per annotation
//! layer: the required token/offset lines, a labeled line for each optional
//! layer that is present (absent layers are omitted entirely, no
//! placeholder), the dependency edges in their storage order, the constituent
//! tree in its single-line form, and finally the coreference chains.
//!
//! Output is written incrementally to the sink as each line is formatted;
//! the report either completes or the run aborts on the first error.
//!
//! The exact line shapes, including the leading space on dependency edge
//! lines and the tab on mention lines:
//!
//! ```text
//! Sentence #0:
//! Tokens: John Smith went to China .
//! Start character offsets: 0 5 11 16 19 24
//! End character offsets: 4 10 15 18 24 25
//! Lemmas: john smith go to china .
//! Syntactic dependencies:
//!  head: 2 modifier: 1 label: nsubj
//! Constituent tree: (ROOT ...)
//!
//!
//! Found one coreference chain containing the following mentions:
//! 	sentenceIndex: 0 headIndex: 1 startTokenOffset: 0 endTokenOffset: 2 text: [John Smith]
//! ```

use std::io::Write;

use crate::annot::annotator::Annotator;
use crate::annot::document::{Document, Sentence};
use crate::annot::error::AnnotError;
use crate::annot::joining::mk_string_spaced;

/// Annotate `text` with one `annotate(text, false)` call and render the
/// resulting document to `out`. Annotator failure is fatal and propagated.
pub fn run<A, W>(annotator: &A, text: &str, out: &mut W) -> Result<(), AnnotError>
where
    A: Annotator + ?Sized,
    W: Write,
{
    let document = annotator.annotate(text, false)?;
    render_report(&document, out)
}

/// Render the full report for `doc`: every sentence block in document order,
/// then the coreference chains when present.
pub fn render_report<W: Write>(doc: &Document, out: &mut W) -> Result<(), AnnotError> {
    for (index, sentence) in doc.sentences.iter().enumerate() {
        render_sentence(index, sentence, out)?;
    }

    if let Some(chains) = &doc.coref_chains {
        for chain in &chains.chains {
            writeln!(
                out,
                "Found one coreference chain containing the following mentions:"
            )?;
            for mention in &chain.mentions {
                let text = doc.mention_text(mention).ok_or_else(|| {
                    AnnotError::MalformedDocument(format!(
                        "mention (sentence {}, tokens {}..{}) is out of range",
                        mention.sentence_index, mention.start_offset, mention.end_offset
                    ))
                })?;
                writeln!(
                    out,
                    "\tsentenceIndex: {} headIndex: {} startTokenOffset: {} endTokenOffset: {} text: [{}]",
                    mention.sentence_index,
                    mention.head_index,
                    mention.start_offset,
                    mention.end_offset,
                    text
                )?;
            }
        }
    }

    Ok(())
}

/// Render the report to a string. Thin wrapper over [`render_report`] for
/// callers that want the whole report at once.
pub fn report_to_string(doc: &Document) -> Result<String, AnnotError> {
    let mut buffer = Vec::new();
    render_report(doc, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| AnnotError::MalformedDocument(format!("report is not valid UTF-8: {}", e)))
}

fn render_sentence<W: Write>(
    index: usize,
    sentence: &Sentence,
    out: &mut W,
) -> Result<(), AnnotError> {
    writeln!(out, "Sentence #{}:", index)?;
    writeln!(out, "Tokens: {}", mk_string_spaced(&sentence.words))?;
    writeln!(
        out,
        "Start character offsets: {}",
        mk_string_spaced(&sentence.start_offsets)
    )?;
    writeln!(
        out,
        "End character offsets: {}",
        mk_string_spaced(&sentence.end_offsets)
    )?;

    if let Some(lemmas) = &sentence.lemmas {
        writeln!(out, "Lemmas: {}", mk_string_spaced(lemmas))?;
    }
    if let Some(tags) = &sentence.tags {
        writeln!(out, "POS tags: {}", mk_string_spaced(tags))?;
    }
    if let Some(chunks) = &sentence.chunks {
        writeln!(out, "Chunks: {}", mk_string_spaced(chunks))?;
    }
    if let Some(entities) = &sentence.entities {
        writeln!(out, "Named entities: {}", mk_string_spaced(entities))?;
    }
    if let Some(norms) = &sentence.norms {
        writeln!(out, "Normalized entities: {}", mk_string_spaced(norms))?;
    }
    if let Some(graph) = &sentence.dependencies {
        writeln!(out, "Syntactic dependencies:")?;
        for edge in &graph.edges {
            writeln!(
                out,
                " head: {} modifier: {} label: {}",
                edge.head, edge.modifier, edge.label
            )?;
        }
    }
    if let Some(tree) = &sentence.syntactic_tree {
        writeln!(out, "Constituent tree: {}", tree)?;
    }

    // Sentence separator: two blank lines.
    writeln!(out)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annot::document::{CorefMention, Document};

    fn sentence(words: &[&str]) -> Sentence {
        Sentence {
            words: words.iter().map(|w| w.to_string()).collect(),
            start_offsets: (0..words.len()).collect(),
            end_offsets: (1..=words.len()).collect(),
            lemmas: None,
            tags: None,
            chunks: None,
            entities: None,
            norms: None,
            dependencies: None,
            syntactic_tree: None,
        }
    }

    #[test]
    fn absent_layers_emit_no_lines() {
        let doc = Document {
            sentences: vec![sentence(&["Hi", "."])],
            coref_chains: None,
        };
        let report = report_to_string(&doc).unwrap();
        assert!(!report.contains("Lemmas:"));
        assert!(!report.contains("POS tags:"));
        assert!(!report.contains("Syntactic dependencies:"));
        assert!(!report.contains("Constituent tree:"));
        assert!(!report.contains("coreference chain"));
    }

    #[test]
    fn out_of_range_mention_aborts_the_report() {
        let doc = Document {
            sentences: vec![sentence(&["Hi", "."])],
            coref_chains: Some(crate::annot::document::CorefChains {
                chains: vec![crate::annot::document::CorefChain {
                    mentions: vec![CorefMention {
                        sentence_index: 0,
                        head_index: 0,
                        start_offset: 0,
                        end_offset: 9,
                    }],
                }],
            }),
        };
        let err = report_to_string(&doc).unwrap_err();
        assert!(matches!(err, AnnotError::MalformedDocument(_)));
    }
}

//! Annotation document model
//!
//! The types in this module mirror the result shape produced by an external
//! annotator: a document is an ordered sequence of sentences, each sentence a
//! set of parallel per-token arrays, and the document optionally carries the
//! coreference chains resolved across its sentences.
//!
//! Offsets
//!
//!     All character offsets are 0-based with exclusive ends, and all token
//!     indices are 0-based. This differs from the 1-based conventions some
//!     annotators use; documents loaded from such tools must be shifted before
//!     they enter this model.
//!
//! Parallel layers
//!
//!     The required arrays (`words`, `start_offsets`, `end_offsets`) and every
//!     present optional layer (`lemmas`, `tags`, `chunks`, `entities`,
//!     `norms`) must all have the same length: one entry per token. An absent
//!     layer is `None`, never an empty or padded vector. `Document::validate`
//!     checks these invariants and is run on every loaded document.
//!
//! Everything here is read-only after construction: the annotator produces a
//! document in one batch and the report driver only traverses it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::annot::error::AnnotError;

/// The full annotated result for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sentences in document order.
    pub sentences: Vec<Sentence>,
    /// Coreference chains, when the annotator resolved any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coref_chains: Option<CorefChains>,
}

/// One annotated sentence: tokens, offsets, and optional linguistic layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Token surface forms.
    pub words: Vec<String>,
    /// Start character offset of each token (0-based, inclusive).
    pub start_offsets: Vec<usize>,
    /// End character offset of each token (0-based, exclusive).
    pub end_offsets: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemmas: Option<Vec<String>>,
    /// Part-of-speech tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Shallow-parse chunk labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<String>>,
    /// Named-entity labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<String>>,
    /// Normalized entity values (e.g. ISO dates for DATE spans).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyGraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntactic_tree: Option<Tree>,
}

impl Sentence {
    /// Number of tokens in the sentence.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Syntactic dependencies of one sentence.
///
/// Edge order is the storage order the annotator produced; nothing more is
/// guaranteed and the renderer never sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub edges: Vec<DependencyEdge>,
    /// Root token indices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<usize>,
}

/// A (head, modifier, label) triple between two tokens of one sentence.
/// Indices are 0-based and local to the owning sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub head: usize,
    pub modifier: usize,
    pub label: String,
}

/// A constituent tree node. Leaves are bare labels (usually token surface
/// forms); `Display` renders the parenthesized single-line form, e.g.
/// `(NP (NNP John) (NNP Smith))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tree>,
}

impl Tree {
    pub fn leaf(label: impl Into<String>) -> Self {
        Tree {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn node(label: impl Into<String>, children: Vec<Tree>) -> Self {
        Tree {
            label: label.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "({}", self.label)?;
            for child in &self.children {
                write!(f, " {}", child)?;
            }
            write!(f, ")")
        }
    }
}

/// All coreference chains of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorefChains {
    pub chains: Vec<CorefChain>,
}

/// An ordered group of mentions judged to refer to the same entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorefChain {
    pub mentions: Vec<CorefMention>,
}

/// A token span within one sentence believed to refer to an entity.
///
/// A mention does not own the tokens it references: it is a back-reference
/// resolved against the owning document's sentences at read time. All fields
/// are 0-based and token-indexed (not character-indexed); `end_offset` is
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorefMention {
    pub sentence_index: usize,
    pub head_index: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Document {
    /// Reconstruct the surface text of a mention by slicing the referenced
    /// sentence's tokens `start_offset..end_offset` and joining them with a
    /// single space. Returns `None` when the mention points outside the
    /// document.
    pub fn mention_text(&self, mention: &CorefMention) -> Option<String> {
        let sentence = self.sentences.get(mention.sentence_index)?;
        if mention.start_offset > mention.end_offset || mention.end_offset > sentence.len() {
            return None;
        }
        Some(sentence.words[mention.start_offset..mention.end_offset].join(" "))
    }

    /// Check the model invariants, failing fast with a diagnostic naming the
    /// offending sentence, layer, or chain.
    pub fn validate(&self) -> Result<(), AnnotError> {
        for (index, sentence) in self.sentences.iter().enumerate() {
            validate_sentence(index, sentence)?;
        }
        if let Some(chains) = &self.coref_chains {
            for (chain_index, chain) in chains.chains.iter().enumerate() {
                for mention in &chain.mentions {
                    self.validate_mention(chain_index, mention)?;
                }
            }
        }
        Ok(())
    }

    fn validate_mention(
        &self,
        chain_index: usize,
        mention: &CorefMention,
    ) -> Result<(), AnnotError> {
        let malformed = |msg: String| Err(AnnotError::MalformedDocument(msg));
        let sentence = match self.sentences.get(mention.sentence_index) {
            Some(sentence) => sentence,
            None => {
                return malformed(format!(
                    "chain {}: mention references sentence {} but the document has {} sentences",
                    chain_index,
                    mention.sentence_index,
                    self.sentences.len()
                ))
            }
        };
        if mention.start_offset > mention.end_offset {
            return malformed(format!(
                "chain {}: mention in sentence {} has startTokenOffset {} > endTokenOffset {}",
                chain_index, mention.sentence_index, mention.start_offset, mention.end_offset
            ));
        }
        if mention.end_offset > sentence.len() {
            return malformed(format!(
                "chain {}: mention in sentence {} ends at token {} but the sentence has {} tokens",
                chain_index,
                mention.sentence_index,
                mention.end_offset,
                sentence.len()
            ));
        }
        if mention.head_index >= sentence.len() {
            return malformed(format!(
                "chain {}: mention in sentence {} has headIndex {} but the sentence has {} tokens",
                chain_index,
                mention.sentence_index,
                mention.head_index,
                sentence.len()
            ));
        }
        Ok(())
    }
}

fn validate_sentence(index: usize, sentence: &Sentence) -> Result<(), AnnotError> {
    let token_count = sentence.len();
    let check_layer = |name: &str, layer: Option<&Vec<String>>| -> Result<(), AnnotError> {
        match layer {
            Some(values) if values.len() != token_count => {
                Err(AnnotError::MalformedDocument(format!(
                    "sentence {}: {} has {} entries for {} tokens",
                    index,
                    name,
                    values.len(),
                    token_count
                )))
            }
            _ => Ok(()),
        }
    };

    if sentence.start_offsets.len() != token_count || sentence.end_offsets.len() != token_count {
        return Err(AnnotError::MalformedDocument(format!(
            "sentence {}: {} tokens but {} start offsets and {} end offsets",
            index,
            token_count,
            sentence.start_offsets.len(),
            sentence.end_offsets.len()
        )));
    }
    for (token, (start, end)) in sentence
        .start_offsets
        .iter()
        .zip(&sentence.end_offsets)
        .enumerate()
    {
        if start > end {
            return Err(AnnotError::MalformedDocument(format!(
                "sentence {}: token {} has start offset {} > end offset {}",
                index, token, start, end
            )));
        }
    }

    check_layer("lemmas", sentence.lemmas.as_ref())?;
    check_layer("tags", sentence.tags.as_ref())?;
    check_layer("chunks", sentence.chunks.as_ref())?;
    check_layer("entities", sentence.entities.as_ref())?;
    check_layer("norms", sentence.norms.as_ref())?;

    if let Some(graph) = &sentence.dependencies {
        for edge in &graph.edges {
            if edge.head >= token_count || edge.modifier >= token_count {
                return Err(AnnotError::MalformedDocument(format!(
                    "sentence {}: dependency edge ({}, {}, {}) references a token outside 0..{}",
                    index, edge.head, edge.modifier, edge.label, token_count
                )));
            }
        }
        for root in &graph.roots {
            if *root >= token_count {
                return Err(AnnotError::MalformedDocument(format!(
                    "sentence {}: dependency root {} is outside 0..{}",
                    index, root, token_count
                )));
            }
        }
    }

    Ok(())
}

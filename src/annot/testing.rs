//! Verified fixture documents
//!
//! These are the canonical annotated sources for tests and the `demo`
//! subcommand. Offsets were verified by hand against [`DEMO_TEXT`]; tests
//! should use these accessors instead of copying annotation content so
//! every consumer sees the same verified data.

use once_cell::sync::Lazy;

use crate::annot::annotator::CannedAnnotator;
use crate::annot::document::{
    CorefChain, CorefChains, CorefMention, DependencyEdge, DependencyGraph, Document, Sentence,
    Tree,
};

/// The input text of the demo document.
pub const DEMO_TEXT: &str = "John Smith went to China. He visited Beijing on January 10th, 2013.";

static JOHN_SMITH: Lazy<Document> = Lazy::new(build_john_smith);
static BARE: Lazy<Document> = Lazy::new(build_bare);

/// Two fully annotated sentences over [`DEMO_TEXT`] with one coreference
/// chain linking "John Smith" and "He".
pub fn john_smith_document() -> Document {
    JOHN_SMITH.clone()
}

/// A single sentence carrying only the required layers: tokens and offsets.
/// No optional layers, no coreference chains.
pub fn bare_document() -> Document {
    BARE.clone()
}

/// A [`CannedAnnotator`] that annotates [`DEMO_TEXT`] with
/// [`john_smith_document`].
pub fn demo_annotator() -> CannedAnnotator {
    CannedAnnotator::new(DEMO_TEXT, john_smith_document())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn edge(head: usize, modifier: usize, label: &str) -> DependencyEdge {
    DependencyEdge {
        head,
        modifier,
        label: label.to_string(),
    }
}

fn build_john_smith() -> Document {
    let sentence0 = Sentence {
        words: strings(&["John", "Smith", "went", "to", "China", "."]),
        start_offsets: vec![0, 5, 11, 16, 19, 24],
        end_offsets: vec![4, 10, 15, 18, 24, 25],
        lemmas: Some(strings(&["john", "smith", "go", "to", "china", "."])),
        tags: Some(strings(&["NNP", "NNP", "VBD", "TO", "NNP", "."])),
        chunks: Some(strings(&["B-NP", "I-NP", "B-VP", "B-PP", "B-NP", "O"])),
        entities: Some(strings(&["PERSON", "PERSON", "O", "O", "LOCATION", "O"])),
        norms: Some(strings(&["O", "O", "O", "O", "O", "O"])),
        dependencies: Some(DependencyGraph {
            edges: vec![
                edge(1, 0, "nn"),
                edge(2, 1, "nsubj"),
                edge(2, 3, "prep"),
                edge(3, 4, "pobj"),
                edge(2, 5, "punct"),
            ],
            roots: vec![2],
        }),
        syntactic_tree: Some(Tree::node(
            "ROOT",
            vec![Tree::node(
                "S",
                vec![
                    Tree::node(
                        "NP",
                        vec![
                            Tree::node("NNP", vec![Tree::leaf("John")]),
                            Tree::node("NNP", vec![Tree::leaf("Smith")]),
                        ],
                    ),
                    Tree::node(
                        "VP",
                        vec![
                            Tree::node("VBD", vec![Tree::leaf("went")]),
                            Tree::node(
                                "PP",
                                vec![
                                    Tree::node("TO", vec![Tree::leaf("to")]),
                                    Tree::node("NP", vec![Tree::node("NNP", vec![Tree::leaf("China")])]),
                                ],
                            ),
                        ],
                    ),
                    Tree::node(".", vec![Tree::leaf(".")]),
                ],
            )],
        )),
    };

    let sentence1 = Sentence {
        words: strings(&[
            "He", "visited", "Beijing", "on", "January", "10th", ",", "2013", ".",
        ]),
        start_offsets: vec![26, 29, 37, 45, 48, 56, 60, 62, 66],
        end_offsets: vec![28, 36, 44, 47, 55, 60, 61, 66, 67],
        lemmas: Some(strings(&[
            "he", "visit", "beijing", "on", "january", "10th", ",", "2013", ".",
        ])),
        tags: Some(strings(&[
            "PRP", "VBD", "NNP", "IN", "NNP", "JJ", ",", "CD", ".",
        ])),
        chunks: Some(strings(&[
            "B-NP", "B-VP", "B-NP", "B-PP", "B-NP", "I-NP", "I-NP", "I-NP", "O",
        ])),
        entities: Some(strings(&[
            "O", "O", "LOCATION", "O", "DATE", "DATE", "DATE", "DATE", "O",
        ])),
        norms: Some(strings(&[
            "O",
            "O",
            "O",
            "O",
            "2013-01-10",
            "2013-01-10",
            "2013-01-10",
            "2013-01-10",
            "O",
        ])),
        dependencies: Some(DependencyGraph {
            edges: vec![
                edge(1, 0, "nsubj"),
                edge(1, 2, "dobj"),
                edge(1, 3, "prep"),
                edge(3, 4, "pobj"),
                edge(4, 5, "amod"),
                edge(4, 7, "num"),
                edge(1, 8, "punct"),
            ],
            roots: vec![1],
        }),
        syntactic_tree: Some(Tree::node(
            "ROOT",
            vec![Tree::node(
                "S",
                vec![
                    Tree::node("NP", vec![Tree::node("PRP", vec![Tree::leaf("He")])]),
                    Tree::node(
                        "VP",
                        vec![
                            Tree::node("VBD", vec![Tree::leaf("visited")]),
                            Tree::node("NP", vec![Tree::node("NNP", vec![Tree::leaf("Beijing")])]),
                            Tree::node(
                                "PP",
                                vec![
                                    Tree::node("IN", vec![Tree::leaf("on")]),
                                    Tree::node(
                                        "NP",
                                        vec![
                                            Tree::node("NNP", vec![Tree::leaf("January")]),
                                            Tree::node("JJ", vec![Tree::leaf("10th")]),
                                            Tree::node(",", vec![Tree::leaf(",")]),
                                            Tree::node("CD", vec![Tree::leaf("2013")]),
                                        ],
                                    ),
                                ],
                            ),
                        ],
                    ),
                    Tree::node(".", vec![Tree::leaf(".")]),
                ],
            )],
        )),
    };

    Document {
        sentences: vec![sentence0, sentence1],
        coref_chains: Some(CorefChains {
            chains: vec![CorefChain {
                mentions: vec![
                    CorefMention {
                        sentence_index: 0,
                        head_index: 1,
                        start_offset: 0,
                        end_offset: 2,
                    },
                    CorefMention {
                        sentence_index: 1,
                        head_index: 0,
                        start_offset: 0,
                        end_offset: 1,
                    },
                ],
            }],
        }),
    }
}

fn build_bare() -> Document {
    Document {
        sentences: vec![Sentence {
            words: strings(&["Hello", "world", "!"]),
            start_offsets: vec![0, 6, 11],
            end_offsets: vec![5, 11, 12],
            lemmas: None,
            tags: None,
            chunks: None,
            entities: None,
            norms: None,
            dependencies: None,
            syntactic_tree: None,
        }],
        coref_chains: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_documents_satisfy_the_model_invariants() {
        john_smith_document().validate().unwrap();
        bare_document().validate().unwrap();
    }

    #[test]
    fn fixture_offsets_match_the_demo_text() {
        let doc = john_smith_document();
        for sentence in &doc.sentences {
            for ((word, start), end) in sentence
                .words
                .iter()
                .zip(&sentence.start_offsets)
                .zip(&sentence.end_offsets)
            {
                assert_eq!(&DEMO_TEXT[*start..*end], word);
            }
        }
    }
}

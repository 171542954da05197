//! # annot
//!
//! A viewer for linguistic annotation documents.
//!
//! The crate consumes the result of an external natural-language annotator
//! (a `Document` of sentences carrying tokens, character offsets, and
//! optional linguistic layers, plus optional coreference chains) and
//! renders a deterministic line-oriented report of every layer. No
//! linguistic processing happens here: tokenization, tagging, parsing and
//! coreference resolution all live behind the `Annotator` trait.
//!
//! For the verified fixture documents used by the tests and the `demo`
//! subcommand, see the [testing module](annot::testing).

pub mod annot;

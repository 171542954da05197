//! Main module for annot library functionality

pub mod annotator;
pub mod document;
pub mod error;
pub mod joining;
pub mod loading;
pub mod reporting;
pub mod testing;

//! Core repair building blocks: the curated substitution rules and the pure
//! pipeline that folds them over a text buffer. These are internal
//! primitives consumed by the high-level `api` module.
pub mod pipeline;
pub mod rules;

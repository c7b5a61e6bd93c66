//! Classification and canonical reordering of import blocks.
//!
//! This is the host-agnostic core: it sees only parsed import statements and
//! an injected render function, and decides whether the block is already in
//! canonical order or needs a full-block rewrite.

pub mod category;
pub mod reorder;

pub use category::{Category, Group, classify, group};
pub use reorder::{Decision, analyze};

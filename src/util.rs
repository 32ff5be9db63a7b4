//! Shared character utilities used across the analysis components.

pub mod chars;
pub mod unicode_block;

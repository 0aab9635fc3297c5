// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod fold;
pub mod host;
pub mod indices;

pub use config::FoldConfig;
pub use fold::{FoldIndex, RangeFold, fold, fold_with, try_fold, try_fold_with};
pub use indices::Indices;

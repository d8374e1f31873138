//! # hanlint_core
//!
//! Core checking engine for hanlint, a style checker for
//! Chinese-language Markdown prose.
//!
//! This crate provides:
//! - The line classifier separating prose from code fences and tables
//! - The length-preserving inline-code sanitizer
//! - The detector rule catalogue and the `Issue` model
//! - Single-file and parallel multi-file checking
//!
//! ## Example
//!
//! ```rust
//! use hanlint_core::check;
//!
//! let issues = check("使用Rust编写\n", true);
//! for issue in &issues {
//!     println!("{}:{} [{}] {}", issue.line, issue.column, issue.rule, issue.message);
//! }
//! ```

mod checker;
mod classifier;
mod config;
mod error;
mod issue;
pub mod rules;
mod sanitize;

pub use checker::{Checker, FileReport, check};
pub use classifier::{ClassifiedLine, LineClassifier};
pub use config::CheckConfig;
pub use error::CheckError;
pub use issue::{Issue, RuleId, Severity};
pub use rules::{LineContext, Rule, all_rules};
pub use sanitize::{mask_inline_code, mask_links};

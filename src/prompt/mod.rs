//! Prompt composition.
//!
//! This module provides:
//!
//! - **Template**: `{variable}` substitution engine
//! - **Composer**: renders the summary and answers into the final prompt
//!
//! # Template Syntax
//!
//! Templates use `{variable}` placeholders:
//!
//! ```text
//! ## Project Summary
//!
//! {summary}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod composer;
mod template;

pub use composer::{compose_prompt, render_output};
pub use template::TemplateError;

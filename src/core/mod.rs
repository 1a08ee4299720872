// src/core/mod.rs

pub mod escape;
pub mod html;
pub mod sanitize;

pub use html::{Markup, Tag};

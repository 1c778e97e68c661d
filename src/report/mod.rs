// src/report/mod.rs

//! Output side of the generator.
//!
//! - [`text`] serializes edges, frontier sets and node attributes.
//! - [`render`] draws the DAG as a PNG, using the force-directed placement
//!   from [`layout`].

pub mod layout;
pub mod render;
pub mod text;

pub use render::{RenderOptions, render_image, write_image};
pub use text::{ParsedReport, fingerprint, parse_text_report, render_text_report, write_text_report};

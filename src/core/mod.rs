//! Record-to-text compiler.
//!
//! Records are adapted to named textual fields, rendered to header and data
//! lines, stably sorted by type precedence, grouped into blocks and
//! assembled into IIF text with the bracketed transaction section.

mod assemble;
mod config;
mod error;
mod group;
mod record;
mod render;
mod types;

pub use assemble::assemble;
pub use config::*;
pub use error::*;
pub use group::{Block, check_headers, group_lines, sort_lines};
pub use record::*;
pub use render::{RenderedLine, render, render_data, render_header};
pub use types::*;

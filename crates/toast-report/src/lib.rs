//! Ceremony script production: composing announcement lines from resolved
//! winners and rendering them into a double-brace template.

pub mod compose;
pub mod render;

pub use compose::{HighlightTracker, compose_team_list, compose_winners, ordinal};
pub use render::{RenderOutcome, extract_placeholders, render, write_script};

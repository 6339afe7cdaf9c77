//! Domain Entities
//!
//! - `Release` - the upstream release resolved for this run
//! - `FontFileRecord` - a normalized font binary
//! - `IconEntry` / `IconManifest` / `StyleClassification` - icon metadata

mod font_file;
mod icon;
mod release;

pub use font_file::{normalize_font_name, FontFileRecord};
pub use icon::{IconEntry, IconManifest, StyleClassification};
pub use release::Release;

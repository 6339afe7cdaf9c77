//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod font_role;
mod stamp;
mod style;
mod version;

pub use font_role::{FontRole, FontRoleTable};
pub use stamp::GenerationStamp;
pub use style::IconStyle;
pub use version::{version_major, version_major_or, DEFAULT_MAJOR};

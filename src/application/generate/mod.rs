//! Generate Module
//!
//! Orchestrates package generation.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`GenerateOptions`)
//! - `result` - Result types (`GenerateResult`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use faltex::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(release_source, archive_source);
//! let result = use_case.execute(&GenerateOptions::new("out"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;

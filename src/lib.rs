//! faltex - Font Awesome to LaTeX package generator
//!
//! faltex resolves the latest Font Awesome release, downloads its desktop
//! archive, copies the OpenType fonts under space-free names and renders a
//! XeLaTeX/LuaLaTeX package (`fontawesome<major>.sty`) together with an
//! example document, a README and a Makefile.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{FontFileRecord, IconEntry, IconManifest, Release};
pub use domain::ports::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use domain::value_objects::{GenerationStamp, IconStyle};
pub use error::{ErrorKind, FaltexError, FaltexResult};

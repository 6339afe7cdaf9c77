//! Domain Layer
//!
//! Pure data and rendering logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Release, FontFileRecord, IconEntry/IconManifest
//! - `value_objects/` - IconStyle, FontRoleTable, GenerationStamp, version helpers
//! - `services/` - Package definition and companion document renderers
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Renderers take every input, including the timestamp, as an argument
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

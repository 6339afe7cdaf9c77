//! Domain Services
//!
//! Pure rendering of the generated package files.

mod documents;
mod package_renderer;

pub use documents::{
    render_example, render_makefile, render_readme, EXAMPLE_FILE, MAKEFILE_FILE, README_FILE,
};
pub use package_renderer::{render_package, PackageMeta, RenderResult};

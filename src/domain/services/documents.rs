//! Companion documents: example document, README and Makefile
//!
//! Each renderer is a pure function of its arguments. The README takes the
//! icon count returned by [`render_package`](super::render_package)
//! explicitly, so it can only be rendered after the package definition.

use super::package_renderer::PackageMeta;

const EXAMPLE_TEMPLATE: &str = include_str!("templates/example.tex");
const README_TEMPLATE: &str = include_str!("templates/README.md");

pub const EXAMPLE_FILE: &str = "example.tex";
pub const README_FILE: &str = "README.md";
pub const MAKEFILE_FILE: &str = "Makefile";

/// Substitute `@@KEY@@` placeholders
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("@@{}@@", key), value)
    })
}

/// `example.tex` demonstrating all three styles
pub fn render_example(meta: &PackageMeta) -> String {
    fill(
        EXAMPLE_TEMPLATE,
        &[("PACKAGE", &meta.package_name()), ("MAJOR", meta.major())],
    )
}

/// `README.md` for the generated package
pub fn render_readme(meta: &PackageMeta, icon_count: usize) -> String {
    fill(
        README_TEMPLATE,
        &[
            ("VERSION", meta.version()),
            ("ICON_COUNT", &icon_count.to_string()),
            ("STY_FILE", &meta.sty_file_name()),
            ("PACKAGE", &meta.package_name()),
            ("GENERATED_AT", &meta.stamp().long()),
        ],
    )
}

/// `Makefile` compiling `<example_stem>.tex` with `engine`
pub fn render_makefile(meta: &PackageMeta, engine: &str, example_stem: &str) -> String {
    format!(
        "# FontAwesome {major} LaTeX Package Makefile\n\
         # Auto-generated on {generated}\n\
         \n\
         STY_FILE = {sty}\n\
         FONT_FILES := $(wildcard fonts/*)\n\
         \n\
         MAIN_TEX = {example_stem}.tex\n\
         MAIN_PDF = {example_stem}.pdf\n\
         LATEX_ENGINE = {engine}\n\
         \n\
         .PHONY: all clean\n\
         \n\
         # Default target\n\
         all: $(MAIN_PDF)\n\
         \n\
         # Build the PDF\n\
         $(MAIN_PDF): $(MAIN_TEX) $(STY_FILE) $(FONT_FILES)\n\
         \t$(LATEX_ENGINE) $(MAIN_TEX)\n\
         \n\
         # Remove intermediate files\n\
         clean:\n\
         \trm -f *.aux *.log *.out *.synctex.gz *.fls *.fdb_latexmk\n",
        major = meta.major(),
        generated = meta.stamp().long(),
        sty = meta.sty_file_name(),
    )
}

//! GitHub Actions workflow commands

use std::path::Path;

/// `::error file=...,title=faltex::message`
pub fn github_error_annotation(message: &str, file: Option<&Path>) -> String {
    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape(&file.display().to_string())));
    }
    props.push("title=faltex".to_string());

    format!("::error {}::{}", props.join(","), escape(message))
}

fn escape(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

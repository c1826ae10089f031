//! Configuration constants and default value functions.

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".filehead.yaml";

/// Default file extensions to check (C-family comment syntax).
pub fn default_extensions() -> Vec<String> {
    [
        "ts", "tsx", "js", "jsx", "mjs", "cjs", "rs", "c", "h", "cc", "cpp", "hpp", "java", "go",
        "swift", "kt", "scala", "css", "scss",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

/// Default glob patterns skipped during file discovery.
pub fn default_exclude() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
        "**/.git/**".to_string(),
    ]
}

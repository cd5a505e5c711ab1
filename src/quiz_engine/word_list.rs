use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::quiz_engine::error::LoadError;

/// File name of the bundled word list.
pub const DEFAULT_WORD_LIST: &str = "movies.txt";

/// Places `movies.txt` is looked for, in order: beside the executable, the
/// working directory, then the crate root it was built from.
pub fn word_list_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        candidates.push(dir.join(DEFAULT_WORD_LIST));
    }
    candidates.push(PathBuf::from(DEFAULT_WORD_LIST));
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_WORD_LIST));
    candidates
}

/// First candidate that exists. With none present the first candidate is
/// returned so the load error names the primary location.
pub fn resolve_word_list(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORD_LIST))
}

pub fn default_word_list_path() -> PathBuf {
    let path = resolve_word_list(&word_list_candidates());
    debug!("default word list resolved to {}", path.display());
    path
}

/// One title per line; surrounding whitespace trimmed, blank lines dropped.
pub fn parse_titles(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a word list. A missing, unreadable or blank file is an error.
pub fn load_titles(path: &Path) -> Result<Vec<String>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::Missing { path: path.to_path_buf() },
        _ => LoadError::Unreadable { path: path.to_path_buf(), source },
    })?;

    let titles = parse_titles(&text);
    if titles.is_empty() {
        return Err(LoadError::Empty { path: path.to_path_buf() });
    }

    debug!("loaded {} titles from {}", titles.len(), path.display());
    Ok(titles)
}

//! Writes the generated JSON to a file, the terminal counterpart of the
//! browser download.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::prompt::export_filename;

/// Export `json_text` under a slugified filename derived from `idea`.
/// Returns the path written. Files land in the user's download directory,
/// or the working directory when none is known.
pub fn write_prompt_file(idea: &str, json_text: &str) -> Result<PathBuf> {
    let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    write_prompt_file_in(dir, idea, json_text)
}

fn write_prompt_file_in(dir: PathBuf, idea: &str, json_text: &str) -> Result<PathBuf> {
    fs::create_dir_all(&dir)?;
    let path = dir.join(export_filename(idea));
    fs::write(&path, json_text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_slugified_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            write_prompt_file_in(dir.path().to_path_buf(), "Forest Rain at Night", "{}").unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "forest_rain_at_night.json"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn empty_idea_writes_prompt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_prompt_file_in(dir.path().to_path_buf(), "  ", "{}").unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "prompt.json");
    }
}

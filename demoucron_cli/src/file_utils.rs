use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use demoucron_engine::json::types::JsonProcessRequest;

pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// The `.json` files of a folder and its subfolders, or the path itself when
/// it is a file.
pub fn request_files(path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = read_folder(path)?;
    files.retain(|path| path.extension().map(|ext| ext == "json").unwrap_or(false));
    Ok(files)
}

pub fn read_request(path: &Path) -> anyhow::Result<JsonProcessRequest> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid request in {}", path.display()))
}

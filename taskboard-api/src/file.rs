//! Boards stored as files on disk

use crate::error::{LoadError, Result};
use crate::loader::BoardLoader;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use taskboard_dnd::{Board, BoardId};
use tracing::{debug, trace};

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Loads `<dir>/<id>.json`, `<dir>/<id>.yaml` or `<dir>/<id>.yml`,
/// first match wins
#[derive(Debug, Clone)]
pub struct FileBoardLoader {
    dir: PathBuf,
}

impl FileBoardLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn candidates(&self, id: &BoardId) -> impl Iterator<Item = PathBuf> + '_ {
        let stem = id.as_str().to_string();
        EXTENSIONS
            .iter()
            .map(move |ext| self.dir.join(format!("{}.{}", stem, ext)))
    }
}

#[async_trait]
impl BoardLoader for FileBoardLoader {
    async fn fetch_board(&self, id: &BoardId) -> Result<Board> {
        // Ids become file names; anything path-like cannot name a board here
        let name = id.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Err(LoadError::not_found(id));
        }

        for path in self.candidates(id) {
            trace!("Trying board file: {}", path.display());
            let exists = tokio::fs::try_exists(&path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
            if exists {
                return load_board_file(&path).await;
            }
        }
        Err(LoadError::not_found(id))
    }
}

/// Read a board from a JSON or YAML file, chosen by extension
pub async fn load_board_file(path: &Path) -> Result<Board> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        serde_yaml_ng::from_str(&content).map_err(|e| LoadError::decode(&origin, e))
    } else {
        serde_json::from_str(&content).map_err(|e| LoadError::decode(&origin, e))
    };
    let board: Board = parsed?;

    debug!(board = %board.id, path = %origin, "board loaded from file");
    Ok(board)
}

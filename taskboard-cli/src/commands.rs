//! Command implementations. Each returns the text to print on stdout.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use taskboard_api::{load_board_file, BoardLoader, FileBoardLoader, HttpBoardLoader};
use taskboard_config::{ConfigOverrides, ConfigProvider, TaskboardConfig};
use taskboard_dnd::{Board, BoardId, BoardView, OrderedBoard, Pretty};
use tracing::debug;

use crate::cli::{BoardSource, Cli};
use crate::script::{self, StepReport};
use crate::table;

/// Effective configuration for this invocation
pub fn load_config(cli: &Cli) -> Result<TaskboardConfig> {
    let mut provider = ConfigProvider::new().with_overrides(ConfigOverrides {
        api_root: cli.api_root.clone(),
    });
    if let Some(path) = &cli.config {
        provider = provider.with_file(path)?;
    }
    let config = provider.load()?;
    debug!("configuration: {}", Pretty(&config));
    Ok(config)
}

/// Fetch the board named by `source`
pub async fn load_board(source: &BoardSource, config: &TaskboardConfig) -> Result<Board> {
    if let Some(path) = &source.file {
        return Ok(load_board_file(path).await?);
    }
    let Some(id) = &source.board else {
        anyhow::bail!("either --file or --board is required");
    };
    let id = BoardId::from_string(id.as_str());
    let board = match &source.dir {
        Some(dir) => FileBoardLoader::new(dir).fetch_board(&id).await?,
        None => HttpBoardLoader::new(config.api_root.as_str())
            .fetch_board(&id)
            .await?,
    };
    Ok(board)
}

fn view_of(board: Board) -> BoardView {
    let mut view = BoardView::new();
    view.set_board(Some(Arc::new(board)));
    view
}

pub async fn run_show(
    source: &BoardSource,
    json: bool,
    config: &TaskboardConfig,
) -> Result<String> {
    let board = load_board(source, config).await?;
    let title = board.title.clone();
    let view = view_of(board);

    if json {
        return to_json(view.ordered());
    }
    Ok(table::render_board(&title, view.ordered()))
}

#[derive(Serialize)]
struct ReplayOutput<'a> {
    steps: &'a [StepReport],
    columns: &'a OrderedBoard,
}

pub async fn run_replay(
    file: &Path,
    script_path: &Path,
    json: bool,
    config: &TaskboardConfig,
) -> Result<String> {
    let board = load_board_file(file).await?;
    let steps = script::load_script(script_path)?;
    let title = board.title.clone();
    let mut view = view_of(board);

    let reports = script::replay(&mut view, &steps, &config.sensors)
        .with_context(|| format!("replaying {}", script_path.display()))?;

    if json {
        return to_json(&ReplayOutput {
            steps: &reports,
            columns: view.ordered(),
        });
    }
    Ok(format!(
        "{}\n\n{}",
        table::render_steps(&reports),
        table::render_board(&title, view.ordered())
    ))
}

pub fn run_config(config: &TaskboardConfig) -> Result<String> {
    Ok(serde_yaml_ng::to_string(config)?)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

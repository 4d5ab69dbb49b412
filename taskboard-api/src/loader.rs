//! The seam between board sources and the board view

use crate::error::Result;
use async_trait::async_trait;
use taskboard_dnd::{Board, BoardId};

/// Something that can produce a board by id.
///
/// Implementations return the board as stored; ordering and validation are
/// the caller's business.
#[async_trait]
pub trait BoardLoader: Send + Sync {
    /// Fetch the board with the given id
    async fn fetch_board(&self, id: &BoardId) -> Result<Board>;
}

//! Board loaders for Taskboard
//!
//! [`BoardLoader`] is the single seam the board screen depends on. Two
//! implementations ship here:
//!
//! - [`HttpBoardLoader`] - `GET {api_root}/v1/boards/{id}` against the board API
//! - [`FileBoardLoader`] - `<dir>/<id>.{json,yaml,yml}` on local disk
//!
//! Loaders return the board exactly as stored. Turn it into display order
//! with [`taskboard_dnd::materialize`].

mod error;
mod file;
mod http;
mod loader;

pub use error::{LoadError, Result};
pub use file::{load_board_file, FileBoardLoader};
pub use http::HttpBoardLoader;
pub use loader::BoardLoader;

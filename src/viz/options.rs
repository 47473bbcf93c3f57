//! Layout configuration
//!
//! The knobs a rank-based layout engine exposes: margins, node/edge/rank
//! separation, rank direction, and edge-label position. Loadable from a TOML
//! file, with per-field defaults so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration handed to the layout stage alongside the extracted DAG
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Horizontal margin around the graph, in pixels
    #[serde(default = "default_margin")]
    pub margin_x: u32,

    /// Vertical margin around the graph, in pixels
    #[serde(default = "default_margin")]
    pub margin_y: u32,

    /// Minimum separation between adjacent nodes in the same rank
    #[serde(default = "default_sep")]
    pub node_sep: u32,

    /// Minimum separation between adjacent edges in the same rank
    #[serde(default = "default_sep")]
    pub edge_sep: u32,

    /// Minimum separation between ranks
    #[serde(default = "default_sep")]
    pub rank_sep: u32,

    #[serde(default)]
    pub rank_dir: RankDir,

    #[serde(default)]
    pub label_pos: LabelPos,
}

fn default_margin() -> u32 {
    20
}

fn default_sep() -> u32 {
    40
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin_x: default_margin(),
            margin_y: default_margin(),
            node_sep: default_sep(),
            edge_sep: default_sep(),
            rank_sep: default_sep(),
            rank_dir: RankDir::default(),
            label_pos: LabelPos::default(),
        }
    }
}

impl LayoutOptions {
    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| Error::LayoutOptions {
            file: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

/// Direction ranks are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RankDir {
    #[default]
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl RankDir {
    pub fn as_dot(&self) -> &'static str {
        match self {
            RankDir::TopBottom => "TB",
            RankDir::BottomTop => "BT",
            RankDir::LeftRight => "LR",
            RankDir::RightLeft => "RL",
        }
    }
}

/// Where an edge label sits relative to its edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPos {
    Left,
    #[default]
    Center,
    Right,
}

impl LabelPos {
    pub fn as_dot(&self) -> &'static str {
        match self {
            LabelPos::Left => "l",
            LabelPos::Center => "c",
            LabelPos::Right => "r",
        }
    }
}

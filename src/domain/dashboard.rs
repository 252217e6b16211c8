// Dashboard page domain model
use super::chart::{ChartSpec, Table, Tile};
use super::view::View;
use serde::Serialize;

/// One element of the main panel, rendered in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading { text: String },
    Text { text: String },
    List { ordered: bool, items: Vec<String> },
    Image {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Metrics { tiles: Vec<Tile> },
    Table { id: String, title: String, table: Table },
    Chart { spec: ChartSpec },
    /// A recoverable failure shown to the user in place of a chart.
    Warning { id: String, message: String },
}

impl Block {
    pub fn heading(text: &str) -> Self {
        Block::Heading {
            text: text.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        Block::Text {
            text: text.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Text { .. } => "text",
            Block::List { .. } => "list",
            Block::Image { .. } => "image",
            Block::Metrics { .. } => "metrics",
            Block::Table { .. } => "table",
            Block::Chart { .. } => "chart",
            Block::Warning { .. } => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub view: View,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl DashboardPage {
    pub fn new(view: View, blocks: Vec<Block>) -> Self {
        Self {
            view,
            title: view.page_title().to_string(),
            blocks,
        }
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart { spec } => Some(spec),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Warning { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
impl DashboardPage {
    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts().find(|c| c.id == id)
    }
}

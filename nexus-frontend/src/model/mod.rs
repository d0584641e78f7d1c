use crate::{
    layout::AppLayout,
    settings::{Settings, StartupView},
};

pub mod chat;
pub mod config;
pub mod graph;

use chat::ChatModel;
use config::ConfigModel;
use graph::GraphModel;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppMode {
    Chat,
    Architecture,
    ConfigGen,
}

impl AppMode {
    pub fn next(self) -> Self {
        match self {
            Self::Chat => Self::Architecture,
            Self::Architecture => Self::ConfigGen,
            Self::ConfigGen => Self::Chat,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Chat => Self::ConfigGen,
            Self::Architecture => Self::Chat,
            Self::ConfigGen => Self::Architecture,
        }
    }
}

#[derive(Debug)]
pub struct Model {
    pub mode: AppMode,
    pub chat: ChatModel,
    pub graph: GraphModel,
    pub config: ConfigModel,
    pub layout: AppLayout,
    pub status: Option<String>,
    pub settings: Settings,
}

impl Model {
    pub fn new(settings: Settings) -> Self {
        let mode = match settings.startup_view {
            StartupView::Chat => AppMode::Chat,
            StartupView::Architecture => AppMode::Architecture,
            StartupView::Config => AppMode::ConfigGen,
        };

        Self {
            mode,
            chat: ChatModel::default(),
            graph: GraphModel::default(),
            config: ConfigModel::default(),
            layout: AppLayout::default(),
            status: None,
            settings,
        }
    }
}

use std::fmt;

use nexus_graph::{architecture, layout::Layout, GraphData};

pub const WORLD_WIDTH: f64 = 100.0;
pub const WORLD_HEIGHT: f64 = 100.0;

// ticks to run after a reheat before the simulation is considered settled
const REHEAT_TICKS: u32 = 300;

pub struct GraphModel {
    pub data: GraphData,
    pub layout: Layout,
    pub selected: Option<String>,
    pub explanation: Option<String>,
    pub loading_explanation: bool,
    pub dragged: Option<String>,
    pending_ticks: u32,
}

impl Default for GraphModel {
    fn default() -> Self {
        let data = architecture();
        let layout = Layout::new(&data, WORLD_WIDTH as f32, WORLD_HEIGHT as f32);

        Self {
            data,
            layout,
            selected: None,
            explanation: None,
            loading_explanation: false,
            dragged: None,
            pending_ticks: REHEAT_TICKS,
        }
    }
}

impl GraphModel {
    pub fn settled(&self) -> bool {
        self.pending_ticks == 0
    }

    pub fn reheat(&mut self) {
        self.pending_ticks = REHEAT_TICKS;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.pending_ticks > 0 {
            self.layout.tick(dt);
            self.pending_ticks -= 1;
        }
    }
}

impl fmt::Debug for GraphModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphModel")
            .field("selected", &self.selected)
            .field("explanation", &self.explanation)
            .field("loading_explanation", &self.loading_explanation)
            .field("dragged", &self.dragged)
            .field("pending_ticks", &self.pending_ticks)
            .finish()
    }
}

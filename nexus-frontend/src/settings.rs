#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StartupView {
    #[default]
    Chat,
    Architecture,
    Config,
}

#[derive(Debug)]
pub struct Settings {
    pub startup_view: StartupView,
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            startup_view: StartupView::default(),
            tick_rate_ms: 33,
        }
    }
}

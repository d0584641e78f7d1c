use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub statusline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(100),
                Constraint::Length(1),
            ])
            .split(rect);

        Self {
            header: main[0],
            main: main[1],
            statusline: main[2],
        }
    }
}

impl Default for AppLayout {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

#[derive(Clone, Debug)]
pub struct ChatLayout {
    pub transcript: Rect,
    pub input: Rect,
}

impl ChatLayout {
    pub fn new(rect: Rect) -> Self {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(rect);

        Self {
            transcript: layout[0],
            input: layout[1],
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraphLayout {
    pub canvas: Rect,
    pub panel: Rect,
}

impl GraphLayout {
    pub fn new(rect: Rect) -> Self {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(Constraint::from_ratios([(7, 10), (3, 10)]))
            .split(rect);

        Self {
            canvas: layout[0],
            panel: layout[1],
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConfigLayout {
    pub form: Rect,
    pub output: Rect,
}

impl ConfigLayout {
    pub fn new(rect: Rect) -> Self {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(Constraint::from_ratios([(1, 2), (1, 2)]))
            .split(rect);

        Self {
            form: layout[0],
            output: layout[1],
        }
    }
}

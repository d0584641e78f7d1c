use nexus_gateway::ConfigParams;

pub const CONFIG_ERROR_PLACEHOLDER: &str = "// Error generating config. Check API Key.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigField {
    AppName,
    WindowTitle,
    Identifier,
    Width,
    Height,
    Fullscreen,
    Resizable,
    SecurityRelaxed,
}

impl ConfigField {
    pub fn next(self) -> Self {
        match self {
            Self::AppName => Self::WindowTitle,
            Self::WindowTitle => Self::Identifier,
            Self::Identifier => Self::Width,
            Self::Width => Self::Height,
            Self::Height => Self::Fullscreen,
            Self::Fullscreen => Self::Resizable,
            Self::Resizable => Self::SecurityRelaxed,
            Self::SecurityRelaxed => Self::AppName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::AppName => Self::SecurityRelaxed,
            Self::WindowTitle => Self::AppName,
            Self::Identifier => Self::WindowTitle,
            Self::Width => Self::Identifier,
            Self::Height => Self::Width,
            Self::Fullscreen => Self::Height,
            Self::Resizable => Self::Fullscreen,
            Self::SecurityRelaxed => Self::Resizable,
        }
    }

    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            Self::Fullscreen | Self::Resizable | Self::SecurityRelaxed
        )
    }
}

#[derive(Debug)]
pub struct ConfigModel {
    pub app_name: String,
    pub window_title: String,
    pub identifier: String,
    pub width: String,
    pub height: String,
    pub fullscreen: bool,
    pub resizable: bool,
    pub security_relaxed: bool,
    pub focus: ConfigField,
    pub output: Option<String>,
    pub generating: bool,
}

impl Default for ConfigModel {
    fn default() -> Self {
        let defaults = ConfigParams::default();

        Self {
            app_name: defaults.app_name,
            window_title: defaults.window_title,
            identifier: defaults.identifier,
            width: defaults.width.to_string(),
            height: defaults.height.to_string(),
            fullscreen: defaults.fullscreen,
            resizable: defaults.resizable,
            security_relaxed: defaults.security_relaxed,
            focus: ConfigField::AppName,
            output: None,
            generating: false,
        }
    }
}

impl ConfigModel {
    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ConfigField::AppName => Some(&mut self.app_name),
            ConfigField::WindowTitle => Some(&mut self.window_title),
            ConfigField::Identifier => Some(&mut self.identifier),
            ConfigField::Width => Some(&mut self.width),
            ConfigField::Height => Some(&mut self.height),
            _ => None,
        }
    }

    pub fn toggle_focused(&mut self) {
        match self.focus {
            ConfigField::Fullscreen => self.fullscreen = !self.fullscreen,
            ConfigField::Resizable => self.resizable = !self.resizable,
            ConfigField::SecurityRelaxed => self.security_relaxed = !self.security_relaxed,
            _ => (),
        }
    }

    /// Snapshot of the form; unparsable dimensions fall back to defaults.
    pub fn params(&self) -> ConfigParams {
        let defaults = ConfigParams::default();

        ConfigParams {
            app_name: self.app_name.clone(),
            window_title: self.window_title.clone(),
            identifier: self.identifier.clone(),
            width: self.width.trim().parse().unwrap_or(defaults.width),
            height: self.height.trim().parse().unwrap_or(defaults.height),
            fullscreen: self.fullscreen,
            resizable: self.resizable,
            security_relaxed: self.security_relaxed,
        }
    }
}

use crate::renderer::Renderer;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub fn read_stored_theme<K: KeyValueStore>(store: &K) -> Option<Theme> {
    Theme::from_str(&store.get(THEME_KEY)?)
}

/// Applies the persisted preference once at startup. Nothing stored means
/// the dark default.
pub fn apply_on_load<K: KeyValueStore, R: Renderer>(store: &K, renderer: &mut R) -> Theme {
    let theme = read_stored_theme(store).unwrap_or_default();
    renderer.apply_theme(theme, false);
    theme
}

pub fn toggle<K: KeyValueStore, R: Renderer>(current: Theme, store: &mut K, renderer: &mut R) -> Theme {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str());
    renderer.apply_theme(next, true);
    next
}

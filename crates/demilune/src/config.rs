use crate::geometry::Padding;
use crate::gui::menu::{
    DEFAULT_ICON_SIZE, DEFAULT_MENU_SCALE_FACTOR, DEFAULT_MENU_TO_ITEM_RATIO,
    DEFAULT_SHADOW_RADIUS, DEFAULT_TEXT_SIZE, DARK_GRAY, GRAY, HOLO_LIGHT_BLUE, IconName,
    ItemCallback, ItemId, MenuItem, MenuStyle, Orientation, Paint, PaintStyle, WHITE,
};
use crate::sys::launch::ExecCommand;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

/// `#rrggbb` (or `#rgb`) color, always opaque.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct HexColor(pub Srgba<f64>);

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s.trim().parse()?;
        Ok(Self(rgb.into_format::<f64>().with_alpha(1.0)))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb: Srgb<u8> = self.0.color.into_format();
        write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Srgba<f64>> for HexColor {
    fn from(color: Srgba<f64>) -> Self {
        Self(color)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub enabled: bool,
    pub radius: f64,
    pub color: HexColor,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: DEFAULT_SHADOW_RADIUS,
            color: GRAY.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CenterConfig {
    pub background: HexColor,
    pub toggle_background: HexColor,
    pub text: HexColor,
    pub toggle_text: HexColor,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            background: WHITE.into(),
            toggle_background: HOLO_LIGHT_BLUE.into(),
            text: DARK_GRAY.into(),
            toggle_text: DARK_GRAY.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BorderConfig {
    pub color: HexColor,
    #[serde(default = "default_border_width")]
    pub width: f64,
}

fn default_border_width() -> f64 {
    2.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemConfig {
    pub id: ItemId,
    pub text: String,
    pub icon: Option<IconName>,
    pub exec: Option<ExecCommand>,
    pub normal: Option<HexColor>,
    pub selected: Option<HexColor>,
    pub text_color: Option<HexColor>,
}

impl ItemConfig {
    pub fn to_menu_item(&self, callback: Option<Rc<dyn ItemCallback>>) -> MenuItem {
        let mut item = MenuItem::new(self.id.clone(), self.text.clone());
        let (normal, selected) = (item.normal_color, item.selected_color);
        item = item.with_colors(
            self.normal.map_or(normal, |c| c.0),
            self.selected.map_or(selected, |c| c.0),
        );
        if let Some(color) = self.text_color {
            item = item.with_text_color(color.0);
        }
        if let Some(icon) = &self.icon {
            item = item.with_icon(icon.clone());
        }
        if let Some(callback) = callback {
            item = item.with_callback(callback);
        }
        item
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub orientation: Orientation,
    pub width: i32,
    pub height: i32,
    pub padding: Padding,
    pub text_size: f64,
    pub menu_to_item_ratio: f64,
    pub menu_scale_factor: f64,
    pub icon_size: i32,
    pub open_text: String,
    pub close_text: String,
    pub show_center_text: bool,
    pub show_center_icon: bool,
    pub center_icon: Option<IconName>,
    pub menu_background: HexColor,
    pub shadow: ShadowConfig,
    pub center: CenterConfig,
    pub border: Option<BorderConfig>,
    pub items: Vec<ItemConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            width: 480,
            height: 240,
            padding: Padding::default(),
            text_size: DEFAULT_TEXT_SIZE,
            menu_to_item_ratio: DEFAULT_MENU_TO_ITEM_RATIO,
            menu_scale_factor: DEFAULT_MENU_SCALE_FACTOR,
            icon_size: DEFAULT_ICON_SIZE,
            open_text: "Open".to_string(),
            close_text: "Close".to_string(),
            show_center_text: false,
            show_center_icon: false,
            center_icon: None,
            menu_background: WHITE.into(),
            shadow: ShadowConfig::default(),
            center: CenterConfig::default(),
            border: None,
            items: Vec::new(),
        }
    }
}

impl Config {
    pub fn style(&self) -> MenuStyle {
        let mut style = MenuStyle {
            text_size: self.text_size,
            show_shadows: self.shadow.enabled,
            shadow_radius: self.shadow.radius,
            shadow_color: self.shadow.color.0,
            open_text: self.open_text.clone(),
            close_text: self.close_text.clone(),
            show_center_text: self.show_center_text,
            show_center_icon: self.show_center_icon,
            center_icon: self.center_icon.clone(),
            center_background: self.center.background.0,
            center_toggle_background: self.center.toggle_background.0,
            center_text_color: self.center.text.0,
            center_toggle_text_color: self.center.toggle_text.0,
            menu_background: self.menu_background.0,
            ..MenuStyle::default()
        };
        style.set_border(self.border.as_ref().map(|b| Paint {
            style: PaintStyle::Stroke,
            color: b.color.0,
            stroke_width: b.width,
            ..Paint::default()
        }));
        style
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "demilune", "demilune")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("DEMILUNE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn default_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The user's config when it exists and parses, the bundled one otherwise.
pub fn load_or_default() -> Config {
    let user = match get_config_path() {
        Ok(path) if path.exists() => load_config(),
        Ok(path) => {
            log::info!("No config at {}, using built-in menu", path.display());
            return default_config().unwrap_or_default();
        }
        Err(e) => Err(e),
    };

    user.or_else(|e| {
        log::warn!("Falling back to built-in menu: {}", e);
        default_config()
    })
    .unwrap_or_default()
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

/// Edits, creation and deletion of the config file itself; other files in the
/// directory are ignored.
fn touches_config(event: &notify::Event, config_path: &std::path::Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    // the directory must exist before it can be watched
    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if touches_config(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_deserialization() {
        let cases = vec![
            ("\"bottom\"", Orientation::HorizontalBottom),
            ("\"Bottom\"", Orientation::HorizontalBottom),
            ("\"RIGHT\"", Orientation::VerticalRight),
            ("\"horizontal-top\"", Orientation::HorizontalTop),
            ("\"1\"", Orientation::VerticalLeft),
        ];

        for (json, expected) in cases {
            let deserialized: Orientation = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<Orientation>("\"sideways\"").is_err());
    }

    #[test]
    fn test_hex_color() {
        let color: HexColor = serde_json::from_str("\"#33b5e5\"").unwrap();
        assert_eq!(color.to_string(), "#33b5e5");
        assert!((color.0.color.red - 0.2).abs() < 1e-9);
        assert_eq!(color.0.alpha, 1.0);

        let short: HexColor = "fff".parse().unwrap();
        assert_eq!(short.0, WHITE);
        assert!("#12345".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"orientation": "left", "items": [{"id": "a", "text": "A"}]}"#)
                .unwrap();
        assert_eq!(config.orientation, Orientation::VerticalLeft);
        assert_eq!(config.menu_to_item_ratio, 3.0);
        assert_eq!(config.icon_size, 64);
        assert!(config.border.is_none());
        assert_eq!(config.items[0].id, ItemId::from("a"));
        assert!(config.items[0].exec.is_none());
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = default_config().unwrap();
        assert_eq!(config.orientation, Orientation::HorizontalBottom);
        assert_eq!(config.items.len(), 3);
        assert_eq!(config.items[0].id, ItemId::from("terminal"));
        assert!(config.style().border().is_some());
    }

    #[test]
    fn test_watcher_filters_events() {
        use notify::event::{AccessKind, CreateKind, ModifyKind};
        let path = std::path::PathBuf::from("/tmp/demilune-test/config.toml");

        let modify = notify::Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.clone());
        assert!(touches_config(&modify, &path));

        let create = notify::Event::new(EventKind::Create(CreateKind::File))
            .add_path(path.with_file_name("other.toml"));
        assert!(!touches_config(&create, &path));

        let access = notify::Event::new(EventKind::Access(AccessKind::Any)).add_path(path.clone());
        assert!(!touches_config(&access, &path));
    }

    #[test]
    fn test_item_config_colors() {
        let item_config: ItemConfig = serde_json::from_str(
            r##"{"id": "mail", "text": "Mail", "icon": "mail", "selected": "#ff0000"}"##,
        )
        .unwrap();
        let item = item_config.to_menu_item(None);
        assert_eq!(item.normal_color, WHITE);
        assert_eq!(item.selected_color, Srgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(item.background_color(), WHITE);
        assert_eq!(item.icon, Some(IconName::from("mail")));
    }
}

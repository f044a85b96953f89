//! Router configuration
//!
//! Mirrors the mini-program app configuration: the `window` object carries stack display
//! options and `tabBar` describes the tab strip. Everything can be built in code or parsed
//! from the JSON app configuration with [`RouterOptions::from_json`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Header background used when the caller does not set `headerStyle`
pub const DEFAULT_HEADER_BACKGROUND: &str = "grey";
/// Header text color used when the caller does not set `headerTintColor`
pub const DEFAULT_HEADER_TINT_COLOR: &str = "black";

/// Selected tab tint when `selectedColor` is absent
pub const DEFAULT_SELECTED_COLOR: &str = "#3cc51f";
/// Unselected tab tint when `color` is absent
pub const DEFAULT_COLOR: &str = "#7A7E83";
/// Tab background when `backgroundColor` is absent
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
/// Tab bar border when `borderTopColor` is absent
pub const DEFAULT_BORDER_TOP_COLOR: &str = "#c6c6c6";

// ============================================================================
// NavigationOptions
// ============================================================================

/// Container-wide display options for stack screens
///
/// A flat map of option keys (`headerStyle`, `headerTintColor`, ...) to JSON values.
/// [`merged_over_defaults`](Self::merged_over_defaults) combines caller options with the
/// built-in defaults; the merge is shallow, so a caller `headerStyle` replaces the default
/// `headerStyle` object as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationOptions(Map<String, Value>);

impl NavigationOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults: grey header background, black header text
    pub fn defaults() -> Self {
        let mut header_style = Map::new();
        header_style.insert(
            "backgroundColor".to_string(),
            Value::from(DEFAULT_HEADER_BACKGROUND),
        );

        Self::new()
            .with("headerStyle", Value::Object(header_style))
            .with("headerTintColor", DEFAULT_HEADER_TINT_COLOR)
    }

    /// Set an option, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an option
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get an option
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Option keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no options are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Defaults overlaid with these options, key by key
    pub fn merged_over_defaults(&self) -> Self {
        let mut merged = Self::defaults();
        for (key, value) in &self.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// `headerStyle.backgroundColor`, if set to a string
    pub fn header_background(&self) -> Option<&str> {
        self.get("headerStyle")?.get("backgroundColor")?.as_str()
    }

    /// `headerTintColor`, if set to a string
    pub fn header_tint_color(&self) -> Option<&str> {
        self.get("headerTintColor")?.as_str()
    }
}

// ============================================================================
// Tab Bar
// ============================================================================

/// One entry of the tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    /// Key of the page this tab opens; must match a page entry
    pub page_path: String,
    /// Tab label
    #[serde(default)]
    pub text: String,
    /// Icon asset shown while the tab is not focused
    #[serde(default)]
    pub icon_path: String,
    /// Icon asset shown while the tab is focused
    #[serde(default)]
    pub selected_icon_path: String,
}

impl TabItem {
    /// Create a tab item with no icons
    pub fn new(page_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            page_path: page_path.into(),
            text: text.into(),
            icon_path: String::new(),
            selected_icon_path: String::new(),
        }
    }

    /// Set both icon assets
    pub fn icons(mut self, icon_path: impl Into<String>, selected: impl Into<String>) -> Self {
        self.icon_path = icon_path.into();
        self.selected_icon_path = selected.into();
        self
    }
}

/// Where the tab strip sits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabBarPosition {
    #[default]
    Bottom,
    Top,
}

/// Tab bar configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarConfig {
    /// Tabs in display order
    #[serde(default)]
    pub list: Vec<TabItem>,
    pub selected_color: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub border_top_color: Option<String>,
    #[serde(default)]
    pub position: TabBarPosition,
}

impl TabBarConfig {
    /// Create a tab bar from its items
    pub fn new(list: Vec<TabItem>) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }

    /// Check if this configuration switches the router into tab mode
    pub fn is_tab_mode(&self) -> bool {
        !self.list.is_empty()
    }

    /// Page paths of all tabs, in order
    pub fn tab_paths(&self) -> Vec<&str> {
        self.list.iter().map(|item| item.page_path.as_str()).collect()
    }
}

/// What the back action does on a tab container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackBehavior {
    /// No history across tab switches
    #[default]
    None,
}

/// Resolved tab container styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarOptions {
    pub back_behavior: BackBehavior,
    pub active_tint_color: String,
    pub inactive_tint_color: String,
    pub active_background_color: String,
    pub inactive_background_color: String,
    pub border_color: String,
    pub position: TabBarPosition,
}

impl From<&TabBarConfig> for TabBarOptions {
    fn from(config: &TabBarConfig) -> Self {
        let or_default = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };
        let background = or_default(&config.background_color, DEFAULT_BACKGROUND_COLOR);

        Self {
            back_behavior: BackBehavior::None,
            active_tint_color: or_default(&config.selected_color, DEFAULT_SELECTED_COLOR),
            inactive_tint_color: or_default(&config.color, DEFAULT_COLOR),
            active_background_color: background.clone(),
            inactive_background_color: background,
            border_color: or_default(&config.border_top_color, DEFAULT_BORDER_TOP_COLOR),
            position: config.position,
        }
    }
}

// ============================================================================
// RouterOptions
// ============================================================================

/// Options passed to [`init_router`](crate::init_router)
///
/// # Example
///
/// ```
/// use miniapp_router::RouterOptions;
///
/// let options = RouterOptions::from_json(r#"{
///     "window": { "headerTintColor": "white" },
///     "tabBar": { "list": [{ "pagePath": "home", "text": "Home" }] }
/// }"#).unwrap();
///
/// assert!(options.is_tab_mode());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterOptions {
    /// Display options for every stack
    #[serde(rename = "window", default)]
    pub navigation_options: NavigationOptions,
    /// Optional tab bar
    #[serde(rename = "tabBar", default)]
    pub tab_bar: Option<TabBarConfig>,
}

impl RouterOptions {
    /// Create options with no tab bar and no display overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON app configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set display options
    pub fn with_navigation_options(mut self, navigation_options: NavigationOptions) -> Self {
        self.navigation_options = navigation_options;
        self
    }

    /// Set the tab bar
    pub fn with_tab_bar(mut self, tab_bar: TabBarConfig) -> Self {
        self.tab_bar = Some(tab_bar);
        self
    }

    /// Tab bar, if it has at least one tab
    pub fn active_tab_bar(&self) -> Option<&TabBarConfig> {
        self.tab_bar.as_ref().filter(|tab_bar| tab_bar.is_tab_mode())
    }

    /// Check if the router will be built in tab mode
    pub fn is_tab_mode(&self) -> bool {
        self.active_tab_bar().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let defaults = NavigationOptions::defaults();
        assert_eq!(defaults.header_background(), Some("grey"));
        assert_eq!(defaults.header_tint_color(), Some("black"));
        assert_eq!(defaults.len(), 2);
    }

    #[test]
    fn test_caller_values_override_defaults() {
        let caller = NavigationOptions::new().with("headerTintColor", "white");
        let merged = caller.merged_over_defaults();

        assert_eq!(merged.header_tint_color(), Some("white"));
        assert_eq!(merged.header_background(), Some("grey"));
    }

    #[test]
    fn test_merge_is_shallow() {
        let caller = NavigationOptions::new().with("headerStyle", json!({ "height": 48 }));
        let merged = caller.merged_over_defaults();

        assert_eq!(merged.get("headerStyle"), Some(&json!({ "height": 48 })));
        assert_eq!(merged.header_background(), None);
    }

    #[test]
    fn test_merge_keeps_extra_keys() {
        let caller = NavigationOptions::new().with("gesturesEnabled", false);
        let merged = caller.merged_over_defaults();

        assert_eq!(merged.get("gesturesEnabled"), Some(&json!(false)));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_tab_bar_fallback_colors() {
        let options = TabBarOptions::from(&TabBarConfig::new(vec![TabItem::new("home", "Home")]));

        assert_eq!(options.back_behavior, BackBehavior::None);
        assert_eq!(options.active_tint_color, "#3cc51f");
        assert_eq!(options.inactive_tint_color, "#7A7E83");
        assert_eq!(options.active_background_color, "#ffffff");
        assert_eq!(options.inactive_background_color, "#ffffff");
        assert_eq!(options.border_color, "#c6c6c6");
        assert_eq!(options.position, TabBarPosition::Bottom);
    }

    #[test]
    fn test_tab_bar_supplied_colors() {
        let config = TabBarConfig {
            selected_color: Some("#ff0000".to_string()),
            color: Some("#00ff00".to_string()),
            background_color: Some("#000000".to_string()),
            border_top_color: Some("#111111".to_string()),
            position: TabBarPosition::Top,
            ..TabBarConfig::new(vec![TabItem::new("home", "Home")])
        };
        let options = TabBarOptions::from(&config);

        assert_eq!(options.active_tint_color, "#ff0000");
        assert_eq!(options.inactive_tint_color, "#00ff00");
        assert_eq!(options.inactive_background_color, "#000000");
        assert_eq!(options.border_color, "#111111");
        assert_eq!(options.position, TabBarPosition::Top);
        assert_eq!(options.back_behavior, BackBehavior::default());
    }

    #[test]
    fn test_router_options_from_json() {
        let options = RouterOptions::from_json(
            r##"{
                "window": { "headerStyle": { "backgroundColor": "#222" } },
                "tabBar": {
                    "color": "#999",
                    "position": "top",
                    "list": [
                        { "pagePath": "home", "text": "Home", "iconPath": "a.png", "selectedIconPath": "b.png" },
                        { "pagePath": "cart", "text": "Cart" }
                    ]
                },
                "pages": ["home", "cart"]
            }"##,
        )
        .unwrap();

        assert_eq!(options.navigation_options.header_background(), Some("#222"));
        let tab_bar = options.active_tab_bar().unwrap();
        assert_eq!(tab_bar.tab_paths(), vec!["home", "cart"]);
        assert_eq!(tab_bar.list[0].selected_icon_path, "b.png");
        assert_eq!(tab_bar.list[1].icon_path, "");
        assert_eq!(tab_bar.color.as_deref(), Some("#999"));
        assert_eq!(tab_bar.position, TabBarPosition::Top);
    }

    #[test]
    fn test_empty_tab_list_is_not_tab_mode() {
        let options = RouterOptions::from_json(r#"{ "tabBar": { "list": [] } }"#).unwrap();
        assert!(options.tab_bar.is_some());
        assert!(!options.is_tab_mode());
        assert!(!RouterOptions::new().is_tab_mode());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let error = RouterOptions::from_json("{ not json").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}

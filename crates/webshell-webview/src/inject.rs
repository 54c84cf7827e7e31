//! Post-load visibility fix.
//!
//! The hosted app keeps its root containers transparent until client-side
//! hydration finishes, which some renderers never repaint. After every page
//! finish the supervisor injects a stylesheet that forces them visible.

use webshell_common::Color;
use webshell_config::defaults;
use webshell_config::schema::VisibilityFixConfig;

/// The named hook that builds (or suppresses) the injected script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityFix {
    enabled: bool,
    containers: Vec<String>,
    background: String,
}

impl VisibilityFix {
    pub fn from_config(config: &VisibilityFixConfig) -> Self {
        Self {
            enabled: config.enabled,
            containers: config.containers.clone(),
            background: config.background.clone(),
        }
    }

    /// An unparseable background falls back to the default white.
    pub fn stylesheet(&self) -> String {
        let background = Color::from_hex(&self.background)
            .or_else(|| Color::from_hex(defaults::VISIBILITY_FIX_BACKGROUND))
            .map(|c| c.to_hex())
            .unwrap_or_default();
        let mut css =
            format!("body {{ opacity: 1 !important; background-color: {background}; }}");
        for selector in &self.containers {
            css.push_str(&format!(
                " {selector} {{ opacity: 1 !important; display: block !important; }}"
            ));
        }
        css
    }

    /// Script to evaluate after a page finish, or `None` when disabled.
    pub fn script(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let css = serde_json::to_string(&self.stylesheet())
            .unwrap_or_else(|_| "\"\"".to_string());
        Some(format!(
            "(function() {{\
             var style = document.createElement('style');\
             style.type = 'text/css';\
             style.innerHTML = {css};\
             document.head.appendChild(style);\
             document.body.style.display = 'block';\
             document.body.style.visibility = 'visible';\
             document.body.style.opacity = '1';\
             }})();"
        ))
    }
}

impl Default for VisibilityFix {
    fn default() -> Self {
        Self::from_config(&VisibilityFixConfig::default())
    }
}

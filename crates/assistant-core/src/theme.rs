//! Theme Configuration
//!
//! Color, radius, shadow and animation tokens, read from JSON in the same
//! shape as a Tailwind `theme.extend` block. Every field is optional and
//! falls back to the red house palette.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};

/// Three-step color scale
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scale {
    pub light: String,
    #[serde(rename = "DEFAULT")]
    pub base: String,
    pub dark: String,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            light: "#FCA5A5".into(),
            base: "#EF4444".into(),
            dark: "#991B1B".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accent {
    pub red: String,
    pub light_red: String,
}

impl Default for Accent {
    fn default() -> Self {
        Self {
            red: "#DC2626".into(),
            light_red: "#FEE2E2".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    #[serde(rename = "DEFAULT")]
    pub base: String,
    pub secondary: String,
    pub dark: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            base: "#FFFFFF".into(),
            secondary: "#F9FAFB".into(),
            dark: "#1F2937".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub light: String,
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            primary: "#111827".into(),
            secondary: "#6B7280".into(),
            light: "#9CA3AF".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: Scale,
    pub accent: Accent,
    pub background: Background,
    pub text: TextColors,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Radii {
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
}

impl Default for Radii {
    fn default() -> Self {
        Self {
            xl: "1rem".into(),
            xxl: "1.5rem".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadows {
    pub soft: String,
    pub medium: String,
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            soft: "0 2px 8px rgba(0, 0, 0, 0.08)".into(),
            medium: "0 4px 12px rgba(0, 0, 0, 0.12)".into(),
        }
    }
}

/// Shorthand `animation` values
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animations {
    #[serde(rename = "fade-in")]
    pub fade_in: String,
    #[serde(rename = "slide-up")]
    pub slide_up: String,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            fade_in: "fadeIn 0.5s ease-in-out".into(),
            slide_up: "slideUp 0.4s ease-out".into(),
        }
    }
}

/// Complete set of design tokens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub colors: Palette,
    pub border_radius: Radii,
    pub box_shadow: Shadows,
    pub animation: Animations,
}

/// Component rules; they only reference the custom properties from `:root`
const COMPONENT_CSS: &str = r"
body {
  margin: 0;
  font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  background: var(--color-background);
  color: var(--color-text-primary);
}
.message { display: flex; gap: 0.75rem; padding: 1rem; border-radius: var(--radius-xl); }
.message-user {
  background: color-mix(in srgb, var(--color-primary) 5%, transparent);
  margin-left: 2rem;
}
.message-assistant { background: var(--color-background-secondary); margin-right: 2rem; }
.avatar {
  flex-shrink: 0;
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #FFFFFF;
}
.avatar svg { width: 1.25rem; height: 1.25rem; }
.avatar-user { background: var(--color-primary); }
.avatar-assistant { background: var(--color-accent-red); }
.message-main { flex: 1 1 0%; min-width: 0; }
.message-header { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.25rem; }
.message-label { font-weight: 600; font-size: 0.875rem; color: var(--color-text-primary); }
.message-time { font-size: 0.75rem; color: var(--color-text-light); }
.spinner { width: 0.75rem; height: 0.75rem; color: var(--color-primary); animation: spin 1s linear infinite; }
.message-body {
  color: var(--color-text-primary);
  white-space: pre-wrap;
  overflow-wrap: anywhere;
  word-break: break-word;
}
.typing { display: inline-flex; gap: 0.25rem; }
.typing-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--color-primary);
  animation: bounce 1s infinite;
}
.animate-fade-in { animation: var(--animation-fade-in); }
.animate-slide-up { animation: var(--animation-slide-up); }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}
@keyframes fadeIn { 0% { opacity: 0; } 100% { opacity: 1; } }
@keyframes slideUp {
  0% { transform: translateY(10px); opacity: 0; }
  100% { transform: translateY(0); opacity: 1; }
}
";

impl Theme {
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Self = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Every token must have a value
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.variables() {
            if value.trim().is_empty() {
                return Err(ChatError::Config(format!("theme token {name} is empty")));
            }
        }
        Ok(())
    }

    /// CSS custom property names and values
    pub fn variables(&self) -> Vec<(&'static str, &str)> {
        let c = &self.colors;
        vec![
            ("--color-primary-light", c.primary.light.as_str()),
            ("--color-primary", c.primary.base.as_str()),
            ("--color-primary-dark", c.primary.dark.as_str()),
            ("--color-accent-red", c.accent.red.as_str()),
            ("--color-accent-light-red", c.accent.light_red.as_str()),
            ("--color-background", c.background.base.as_str()),
            ("--color-background-secondary", c.background.secondary.as_str()),
            ("--color-background-dark", c.background.dark.as_str()),
            ("--color-text-primary", c.text.primary.as_str()),
            ("--color-text-secondary", c.text.secondary.as_str()),
            ("--color-text-light", c.text.light.as_str()),
            ("--radius-xl", self.border_radius.xl.as_str()),
            ("--radius-2xl", self.border_radius.xxl.as_str()),
            ("--shadow-soft", self.box_shadow.soft.as_str()),
            ("--shadow-medium", self.box_shadow.medium.as_str()),
            ("--animation-fade-in", self.animation.fade_in.as_str()),
            ("--animation-slide-up", self.animation.slide_up.as_str()),
        ]
    }

    /// Full stylesheet: `:root` tokens followed by the component rules
    pub fn stylesheet(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.variables() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css.push_str(COMPONENT_CSS);
        css
    }
}

//! Light/dark theme, persisted and applied to the document root.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::storage::{self, StorageError};

const STORAGE_KEY: &str = "theme";

/// Visual theme of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Light background, dark text.
	#[default]
	Light,
	/// Dark background, light text.
	Dark,
}

impl Theme {
	/// Stored and `data-theme` value.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// The other theme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Canvas colours for the course graph.
	pub fn palette(self) -> Palette {
		match self {
			Theme::Light => Palette {
				background: "#ffffff",
				surface: "#f8fafc",
				primary: "#3b82f6",
				border: "#cbd5e1",
				text: "#0f172a",
				edge: "rgba(148, 163, 184, 0.8)",
			},
			Theme::Dark => Palette {
				background: "#0f172a",
				surface: "#1e293b",
				primary: "#60a5fa",
				border: "#475569",
				text: "#f1f5f9",
				edge: "rgba(148, 163, 184, 0.8)",
			},
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Theme {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Theme::Light),
			"dark" => Ok(Theme::Dark),
			other => Err(format!("unknown theme {other:?}")),
		}
	}
}

/// Colours used when painting on a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	/// Canvas fill.
	pub background: &'static str,
	/// Fill for non-advanced nodes.
	pub surface: &'static str,
	/// Accent, also the fill for advanced nodes.
	pub primary: &'static str,
	/// Node outline.
	pub border: &'static str,
	/// Label text.
	pub text: &'static str,
	/// Edge stroke and arrowheads.
	pub edge: &'static str,
}

/// Reactive theme shared through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
	/// Current theme.
	pub theme: RwSignal<Theme>,
}

impl ThemeContext {
	/// Read the stored preference, falling back to [`Theme::Light`].
	pub fn load() -> Self {
		let theme = storage::load::<Theme>(STORAGE_KEY).unwrap_or_else(|err| {
			if !matches!(err, StorageError::Missing(_)) {
				log::warn!("theme preference ignored: {err}");
			}
			Theme::default()
		});
		Self {
			theme: RwSignal::new(theme),
		}
	}

	/// Flip the theme and persist it.
	pub fn toggle(&self) {
		self.theme.update(|t| *t = t.toggled());
		if let Err(err) = storage::store(STORAGE_KEY, &self.theme.get_untracked()) {
			log::warn!("could not save theme: {err}");
		}
	}
}

/// Provide the theme context for the app.
pub fn provide_theme() -> ThemeContext {
	let ctx = ThemeContext::load();
	provide_context(ctx);
	ctx
}

/// The app's theme context.
pub fn use_theme() -> ThemeContext {
	expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn theme_string_round_trip() {
		for theme in [Theme::Light, Theme::Dark] {
			assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
			assert_eq!(theme.toggled().toggled(), theme);
		}
		assert!("sepia".parse::<Theme>().is_err());
	}

	#[test]
	fn advanced_fill_differs_from_surface() {
		for theme in [Theme::Light, Theme::Dark] {
			let p = theme.palette();
			assert_ne!(p.primary, p.surface);
		}
	}
}

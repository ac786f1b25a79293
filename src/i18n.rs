//! English and French strings for the site.
//!
//! Lookups never fail: a key missing from the active table comes back as the
//! key itself.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::storage::{self, StorageError};

const STORAGE_KEY: &str = "language";

/// Supported languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
	/// English.
	#[default]
	En,
	/// French.
	Fr,
}

impl Locale {
	/// Stored value and `lang` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Fr => "fr",
		}
	}

	/// The other language.
	pub fn toggled(self) -> Self {
		match self {
			Locale::En => Locale::Fr,
			Locale::Fr => Locale::En,
		}
	}

	fn table(self) -> &'static [(&'static str, &'static str)] {
		match self {
			Locale::En => EN,
			Locale::Fr => FR,
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Locale {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(Locale::En),
			"fr" => Ok(Locale::Fr),
			other => Err(format!("unknown language {other:?}")),
		}
	}
}

const EN: &[(&str, &str)] = &[
	("nav.home", "Home"),
	("nav.courses", "Taken Courses"),
	("nav.projects", "Projects"),
	("nav.research", "Research Experiences"),
	("nav.contact", "Contact"),
	("nav.toggle_language", "Toggle language"),
	("nav.toggle_theme", "Toggle theme"),
	("nav.theme.dark", "Dark"),
	("nav.theme.light", "Light"),
	("home.name", "Your Name"),
	("home.tagline", "Academic Researcher & Scholar"),
	(
		"home.intro",
		"Welcome to my academic website. I am passionate about research and education, with a focus on advancing knowledge in my field. This site showcases my academic journey, projects, and research experiences.",
	),
	("courses.title", "Taken Courses"),
	(
		"courses.graph.subtitle",
		"Prerequisite map of my coursework. Click a course to expand it, drag to rearrange, scroll to zoom.",
	),
	("projects.title", "Projects"),
	("projects.placeholder.title", "Project Title"),
	(
		"projects.placeholder.desc",
		"A brief description of the project, its objectives, and key outcomes.",
	),
	("research.title", "Research Experiences"),
	("research.placeholder.institution", "Institution Name"),
	("research.placeholder.role", "Research Role"),
	(
		"research.placeholder.desc",
		"Description of research activities and contributions.",
	),
	("contact.title", "Contact"),
	("contact.email", "Email"),
	("contact.linkedin", "LinkedIn"),
	("contact.github", "GitHub"),
	("not_found.title", "Page not found"),
	("not_found.back", "Back to home"),
];

const FR: &[(&str, &str)] = &[
	("nav.home", "Accueil"),
	("nav.courses", "Cours Suivis"),
	("nav.projects", "Projets"),
	("nav.research", "Expériences de Recherche"),
	("nav.contact", "Contact"),
	("nav.toggle_language", "Changer de langue"),
	("nav.toggle_theme", "Changer de thème"),
	("nav.theme.dark", "Sombre"),
	("nav.theme.light", "Clair"),
	("home.name", "Votre Nom"),
	("home.tagline", "Chercheur Académique & Universitaire"),
	(
		"home.intro",
		"Bienvenue sur mon site web académique. Je suis passionné par la recherche et l'éducation, avec un focus sur l'avancement des connaissances dans mon domaine. Ce site présente mon parcours académique, mes projets et mes expériences de recherche.",
	),
	("courses.title", "Cours Suivis"),
	(
		"courses.graph.subtitle",
		"Carte des préalables de mes cours. Cliquez sur un cours pour l'ouvrir, glissez pour réorganiser, défilez pour zoomer.",
	),
	("projects.title", "Projets"),
	("projects.placeholder.title", "Titre du Projet"),
	(
		"projects.placeholder.desc",
		"Une brève description du projet, ses objectifs et résultats clés.",
	),
	("research.title", "Expériences de Recherche"),
	("research.placeholder.institution", "Nom de l'Institution"),
	("research.placeholder.role", "Rôle de Recherche"),
	(
		"research.placeholder.desc",
		"Description des activités de recherche et contributions.",
	),
	("contact.title", "Contact"),
	("contact.email", "Courriel"),
	("contact.linkedin", "LinkedIn"),
	("contact.github", "GitHub"),
	("not_found.title", "Page introuvable"),
	("not_found.back", "Retour à l'accueil"),
];

/// Look up `key` for `locale`, returning the key itself when it is missing.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
	locale
		.table()
		.iter()
		.find(|(k, _)| *k == key)
		.map_or(key, |(_, v)| *v)
}

/// Reactive language selection shared through context.
#[derive(Clone, Copy)]
pub struct I18n {
	/// Active language.
	pub locale: RwSignal<Locale>,
}

impl I18n {
	/// Read the stored preference, falling back to English.
	pub fn load() -> Self {
		let locale = storage::load::<Locale>(STORAGE_KEY).unwrap_or_else(|err| {
			if !matches!(err, StorageError::Missing(_)) {
				log::warn!("language preference ignored: {err}");
			}
			Locale::default()
		});
		Self {
			locale: RwSignal::new(locale),
		}
	}

	/// Translate `key` in the active language. Tracks the locale signal.
	pub fn t(&self, key: &str) -> String {
		translate(self.locale.get(), key).to_owned()
	}

	/// Switch language and persist it.
	pub fn toggle(&self) {
		self.locale.update(|l| *l = l.toggled());
		if let Err(err) = storage::store(STORAGE_KEY, &self.locale.get_untracked()) {
			log::warn!("could not save language: {err}");
		}
	}
}

/// Provide the translation context for the app.
pub fn provide_i18n() -> I18n {
	let i18n = I18n::load();
	provide_context(i18n);
	i18n
}

/// The app's translation context.
pub fn use_i18n() -> I18n {
	expect_context::<I18n>()
}

//! Browser-only checks, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use course_graph_portfolio::i18n::Locale;
use course_graph_portfolio::storage::{self, StorageError};
use course_graph_portfolio::theme::Theme;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn preferences_survive_a_round_trip() {
	storage::store("theme", &Theme::Dark).unwrap();
	storage::store("language", &Locale::Fr).unwrap();

	assert_eq!(storage::load::<Theme>("theme"), Ok(Theme::Dark));
	assert_eq!(storage::load::<Locale>("language"), Ok(Locale::Fr));
}

#[wasm_bindgen_test]
fn unknown_stored_value_is_rejected() {
	storage::store("theme", &"sepia").unwrap();
	assert!(matches!(
		storage::load::<Theme>("theme"),
		Err(StorageError::Invalid { .. })
	));
}

#[wasm_bindgen_test]
fn missing_key_is_reported() {
	assert_eq!(
		storage::load::<Theme>("never-written"),
		Err(StorageError::Missing("never-written".into()))
	);
}

//! Single-selection state for the course graph.
//!
//! Switching from one expanded course to another collapses first and expands
//! the new course after a delay, so the two animations do not overlap. The
//! controller does not own a timer: a deferred click hands back a token, and
//! whoever armed the timer completes that token when it fires.

use std::time::Duration;

use log::debug;

/// A delayed expansion waiting on its timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingExpand {
	pub token: u64,
	pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
	Expanded,
	Collapsed,
	/// Collapsed now; arm a timer for `delay` and call
	/// [`SelectionController::complete`] with `token`.
	Deferred { token: u64, delay: Duration },
}

#[derive(Clone, Debug)]
pub struct SelectionController {
	expanded: Option<String>,
	pending: Option<PendingExpand>,
	next_token: u64,
	delay: Duration,
}

impl SelectionController {
	pub fn new(delay: Duration) -> Self {
		Self {
			expanded: None,
			pending: None,
			next_token: 0,
			delay,
		}
	}

	pub fn expanded(&self) -> Option<&str> {
		self.expanded.as_deref()
	}

	/// A course was clicked. Any pending expansion is dropped first, so the
	/// most recent click always wins.
	pub fn click(&mut self, id: &str) -> ClickOutcome {
		self.pending = None;
		match self.expanded.take() {
			None => {
				debug!("expanding {id}");
				self.expanded = Some(id.to_owned());
				ClickOutcome::Expanded
			}
			Some(current) if current == id => {
				debug!("collapsing {id}");
				ClickOutcome::Collapsed
			}
			Some(current) => {
				debug!("switching {current} -> {id}");
				self.next_token += 1;
				let token = self.next_token;
				self.pending = Some(PendingExpand {
					token,
					id: id.to_owned(),
				});
				ClickOutcome::Deferred {
					token,
					delay: self.delay,
				}
			}
		}
	}

	/// The timer for `token` fired. Returns `true` if the selection changed;
	/// superseded or cancelled tokens are ignored.
	pub fn complete(&mut self, token: u64) -> bool {
		match self.pending.take() {
			Some(pending) if pending.token == token => {
				self.expanded = Some(pending.id);
				true
			}
			other => {
				self.pending = other;
				false
			}
		}
	}

	/// Drop the selection and any pending expansion.
	pub fn reset(&mut self) {
		self.expanded = None;
		self.pending = None;
	}
}

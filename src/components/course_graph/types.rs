/// Ordinal classification of a course, drives its base size in the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
	Foundational,
	Intermediate,
	Advanced,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseNode {
	pub id: String,
	pub code: String,
	pub title: String,
	pub description: String,
	pub tier: Tier,
}

/// `source` is a prerequisite of `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<CourseNode>,
	pub links: Vec<CourseLink>,
}

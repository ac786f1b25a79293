pub mod course_graph;
pub mod navbar;

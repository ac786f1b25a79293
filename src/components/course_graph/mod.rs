mod component;
pub mod config;
mod render;
pub mod selection;
mod simulation;
mod state;
mod types;

pub use component::CourseGraphCanvas;
pub use types::{CourseLink, CourseNode, GraphData, Tier};

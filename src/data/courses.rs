//! Courses taken and their prerequisite links.

use crate::components::course_graph::{CourseLink, CourseNode, GraphData, Tier};

/// `(id, code, title, description, tier)`
const COURSES: &[(&str, &str, &str, &str, Tier)] = &[
	("comp250", "COMP 250", "Introduction to Computer Science", "Core programming concepts, data structures, algorithms, and computational reasoning.", Tier::Foundational),
	("ecse202", "ECSE 202", "Introduction to Software Development", "Structured and object-oriented software development practices and tools.", Tier::Foundational),
	("ecse205", "ECSE 205", "Probability and Statistics for Engineers", "Probability models, random variables, statistical inference, and engineering applications.", Tier::Foundational),
	("ecse200", "ECSE 200", "Electric Circuits 1", "Fundamental analysis of electrical circuits using laws, network theorems, and basic dynamic elements.", Tier::Foundational),
	("ecse206", "ECSE 206", "Introduction to Signals and Systems", "Core concepts of continuous and discrete signals, linear systems, and transform-based analysis.", Tier::Foundational),
	("ecse210", "ECSE 210", "Electric Circuits 2", "Advanced circuit analysis including AC steady state, Laplace methods, and LTI system behavior.", Tier::Foundational),
	("ecse222", "ECSE 222", "Digital Logic", "Fundamentals of digital systems including combinational and sequential circuit design.", Tier::Foundational),
	("comp251", "COMP 251", "Algorithms and Data Structures", "Design and analysis of algorithms including graph methods, dynamic programming, and data structures.", Tier::Intermediate),
	("ecse308", "ECSE 308", "Communication Systems and Networks", "Fundamentals of communication systems, networking principles, and signal transmission.", Tier::Intermediate),
	("ecse310", "ECSE 310", "Thermodynamics of Computing", "Thermodynamic principles applied to computation, information, and electronic systems.", Tier::Intermediate),
	("ecse324", "ECSE 324", "Computer Organization", "Computer architecture fundamentals including instruction sets, memory, and processor design.", Tier::Intermediate),
	("ecse325", "ECSE 325", "Digital Systems", "Design and implementation of digital systems with modeling, synthesis, and verification.", Tier::Intermediate),
	("ecse331", "ECSE 331", "Electronics", "Electronic circuit design using diodes, transistors, amplifiers, and simulation tools.", Tier::Intermediate),
	("ecse353", "ECSE 353", "Electromagnetic Fields and Waves", "Electromagnetic theory, wave propagation, and engineering applications.", Tier::Intermediate),
	("ecse343", "ECSE 343", "Numerical Methods in Engineering", "Numerical techniques for solving equations, optimization, and data-driven engineering problems.", Tier::Intermediate),
	("ecse425", "ECSE 425", "Computer Architecture", "Advanced processor architecture including pipelining, parallelism, caching, and memory systems.", Tier::Advanced),
	("ecse427", "ECSE 427", "Operating Systems", "Core operating system concepts including processes, memory management, concurrency, and file systems.", Tier::Advanced),
	("ecse444", "ECSE 444", "Microprocessors", "Design and programming of microprocessor-based systems and real-time embedded hardware.", Tier::Advanced),
	("ecse415", "ECSE 415", "Introduction to Computer Vision", "Image analysis and computer vision techniques for recognition, segmentation, and motion.", Tier::Advanced),
	("comp551", "COMP 551", "Applied Machine Learning", "Machine learning methods for real-world data including classification, clustering, and model deployment.", Tier::Advanced),
	("comp579", "COMP 579", "Reinforcement Learning", "Decision-making algorithms based on Markov processes, learning, and control.", Tier::Advanced),
];

/// `(prerequisite, dependent)`. Some prerequisites are not in the course table
/// and are dropped when the graph is built.
const PREREQUISITES: &[(&str, &str)] = &[
	("ecse202", "comp250"),
	("comp250", "comp251"),
	("ecse200", "ecse206"),
	("ecse200", "ecse210"),
	("ecse202", "ecse222"),
	("ecse205", "ecse308"),
	("ecse206", "ecse308"),
	("ecse200", "ecse310"),
	("ecse205", "ecse310"),
	("ecse222", "ecse310"),
	("ecse200", "ecse324"),
	("ecse222", "ecse324"),
	("ecse324", "ecse325"),
	("ecse210", "ecse331"),
	("ecse210", "ecse353"),
	("math262", "ecse353"),
	("math263", "ecse353"),
	("ecse205", "ecse343"),
	("comp250", "ecse343"),
	("math263", "ecse343"),
	("ecse324", "ecse425"),
	("ecse324", "ecse427"),
	("ecse324", "ecse444"),
	("ecse206", "ecse415"),
	("ecse205", "ecse415"),
	("ecse205", "comp551"),
	("comp551", "comp579"),
];

pub fn course_graph_data() -> GraphData {
	let nodes = COURSES
		.iter()
		.map(|&(id, code, title, description, tier)| CourseNode {
			id: id.into(),
			code: code.into(),
			title: title.into(),
			description: description.into(),
			tier,
		})
		.collect();
	let links = PREREQUISITES
		.iter()
		.map(|&(source, target)| CourseLink {
			source: source.into(),
			target: target.into(),
		})
		.collect();
	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn course_ids_are_unique() {
		let ids: HashSet<&str> = COURSES.iter().map(|c| c.0).collect();
		assert_eq!(ids.len(), COURSES.len());
	}

	#[test]
	fn only_math_prerequisites_are_outside_the_table() {
		let ids: HashSet<&str> = COURSES.iter().map(|c| c.0).collect();
		let dangling: HashSet<&str> = PREREQUISITES
			.iter()
			.flat_map(|&(s, t)| [s, t])
			.filter(|id| !ids.contains(id))
			.collect();
		assert_eq!(dangling, HashSet::from(["math262", "math263"]));
	}

	#[test]
	fn builds_graph_data() {
		let data = course_graph_data();
		assert_eq!(data.nodes.len(), 21);
		assert_eq!(data.links.len(), 27);
		let comp250 = data.nodes.iter().find(|n| n.id == "comp250").unwrap();
		assert_eq!(comp250.code, "COMP 250");
		assert_eq!(comp250.tier, Tier::Foundational);
	}
}

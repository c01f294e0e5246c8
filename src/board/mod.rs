pub mod parser;
pub mod problem;

pub use parser::{parse_board_reader, parse_board_str};
pub use problem::{GOAL, PlanningProblem, ProblemError, START};

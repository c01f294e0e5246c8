pub mod dpll;

pub use dpll::{SatResult, is_sat, solve, solve_model};

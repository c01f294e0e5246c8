pub mod cnf;
pub mod text;

pub use cnf::{Cnf, Lit};

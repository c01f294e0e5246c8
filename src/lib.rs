pub mod atom;
pub mod board;
pub mod cnf;
pub mod encode;
pub mod plan;
pub mod sat;

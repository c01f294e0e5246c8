pub mod narrate;
pub mod project;

pub use narrate::{NO_SOLUTION, narrate, narrate_unsat};
pub use project::{Step, project};

use super::project::Step;

pub const NO_SOLUTION: &str = "NO SOLUTION";

// Renders the projected trace as a move list, one line per step. A treasure
// entering the held set was just picked up; one leaving it was just spent.
pub fn narrate(steps: &[Step]) -> String {
    let mut out = String::new();
    let mut previously_held: Vec<&str> = Vec::new();

    for step in steps {
        let place = step.location().unwrap_or("(nowhere)");
        let held = step.held();

        let mut line = if step.time == 0 {
            format!("{}: start at {}", step.time, place)
        } else {
            format!("{}: move to {}", step.time, place)
        };
        for t in held.iter().filter(|t| !previously_held.contains(t)) {
            line.push_str(&format!(", pick up {}", t));
        }
        for t in previously_held.iter().filter(|t| !held.contains(t)) {
            line.push_str(&format!(", pay {}", t));
        }

        out.push_str(&line);
        out.push('\n');
        previously_held = held;
    }
    out
}

pub fn narrate_unsat() -> String {
    format!("{}\n", NO_SOLUTION)
}

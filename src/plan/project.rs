use anyhow::{Result, bail};

use crate::atom::{Atom, AtomRegistry, Kind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub time: usize,
    pub facts: Vec<Atom>,
}

// Inverts the registry over a total assignment: one entry per time step
// holding the atoms the model made true, in registry id order.
pub fn project(model: &[bool], atoms: &AtomRegistry) -> Result<Vec<Step>> {
    if model.len() != atoms.count() as usize + 1 {
        bail!(
            "model length {} does not match atom count {}",
            model.len(),
            atoms.count()
        );
    }

    let horizon = atoms.iter().map(|(atom, _)| atom.time).max().unwrap_or(0);
    let mut steps = (0..=horizon)
        .map(|time| Step {
            time,
            facts: Vec::new(),
        })
        .collect::<Vec<_>>();

    for (atom, id) in atoms.iter() {
        if model[id as usize] {
            steps[atom.time].facts.push(atom.clone());
        }
    }
    Ok(steps)
}

impl Step {
    pub fn location(&self) -> Option<&str> {
        self.facts
            .iter()
            .find(|fact| matches!(fact.kind, Kind::At))
            .map(|fact| fact.object.as_str())
    }

    pub fn held(&self) -> Vec<&str> {
        self.facts
            .iter()
            .filter(|fact| matches!(fact.kind, Kind::Has))
            .map(|fact| fact.object.as_str())
            .collect()
    }
}

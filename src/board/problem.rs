use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

pub const START: &str = "START";
pub const GOAL: &str = "GOAL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("location '{name}' referenced by {referenced_by} is not declared")]
    UnknownLocation { name: String, referenced_by: String },
    #[error("treasure '{name}' referenced by {referenced_by} is not declared")]
    UnknownTreasure { name: String, referenced_by: String },
    #[error("start node '{0}' is not a declared location")]
    MissingStart(String),
    #[error("goal node '{0}' is not a declared location")]
    MissingGoal(String),
    #[error("goal node '{0}' has no adjacency information")]
    GoalUnreachable(String),
}

// Maps are insertion-ordered on purpose: clause generation iterates them and
// must reproduce the same clause sequence run to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningProblem {
    pub locations: Vec<String>,
    pub treasures: Vec<String>,
    pub start: String,
    pub goal: String,
    pub moves: usize,
    pub graph: IndexMap<String, IndexSet<String>>,
    pub treasure_homes: IndexMap<String, IndexSet<String>>,
    pub tolls: IndexMap<String, IndexSet<String>>,
}

impl Default for PlanningProblem {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            treasures: Vec::new(),
            start: START.to_owned(),
            goal: GOAL.to_owned(),
            moves: 0,
            graph: IndexMap::new(),
            treasure_homes: IndexMap::new(),
            tolls: IndexMap::new(),
        }
    }
}

impl PlanningProblem {
    pub fn validate(&self) -> Result<(), ProblemError> {
        if !self.knows_location(&self.start) {
            return Err(ProblemError::MissingStart(self.start.clone()));
        }
        if !self.knows_location(&self.goal) {
            return Err(ProblemError::MissingGoal(self.goal.clone()));
        }

        for (node, neighbors) in &self.graph {
            self.check_location(node, "an adjacency entry")?;
            for n in neighbors {
                self.check_location(n, &format!("the NEXT list of '{}'", node))?;
            }
        }
        for (node, prizes) in &self.treasure_homes {
            self.check_location(node, "a treasure entry")?;
            for t in prizes {
                self.check_treasure(t, &format!("the TREASURES list of '{}'", node))?;
            }
        }
        for (node, fees) in &self.tolls {
            self.check_location(node, "a toll entry")?;
            for t in fees {
                self.check_treasure(t, &format!("the TOLLS list of '{}'", node))?;
            }
        }

        if !self.graph.contains_key(&self.goal) {
            return Err(ProblemError::GoalUnreachable(self.goal.clone()));
        }
        Ok(())
    }

    pub fn synthesize_goal_self_loop(&mut self) {
        let goal = self.goal.clone();
        if let Some(neighbors) = self.graph.get_mut(&goal) {
            if !neighbors.contains(&goal) {
                neighbors.insert(goal);
            }
        }
    }

    fn knows_location(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l == name)
    }

    fn knows_treasure(&self, name: &str) -> bool {
        self.treasures.iter().any(|t| t == name)
    }

    fn check_location(&self, name: &str, referenced_by: &str) -> Result<(), ProblemError> {
        if self.knows_location(name) {
            Ok(())
        } else {
            Err(ProblemError::UnknownLocation {
                name: name.to_owned(),
                referenced_by: referenced_by.to_owned(),
            })
        }
    }

    fn check_treasure(&self, name: &str, referenced_by: &str) -> Result<(), ProblemError> {
        if self.knows_treasure(name) {
            Ok(())
        } else {
            Err(ProblemError::UnknownTreasure {
                name: name.to_owned(),
                referenced_by: referenced_by.to_owned(),
            })
        }
    }
}

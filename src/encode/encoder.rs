use crate::atom::{Atom, AtomRegistry};
use crate::board::problem::{PlanningProblem, ProblemError};
use crate::cnf::{Cnf, Lit};

#[derive(Debug, Clone)]
pub struct BoardCnf {
    pub cnf: Cnf,
    pub atoms: AtomRegistry,
}

// Compiles the board into clauses over (kind, object, time) atoms. Thirteen
// clause groups, emitted in a fixed order so the same board always yields the
// same clause file.
pub fn encode_board(problem: &PlanningProblem) -> Result<BoardCnf, ProblemError> {
    problem.validate()?;

    let atoms = AtomRegistry::enumerate(&problem.locations, &problem.treasures, problem.moves);
    let mut enc = Encoder {
        problem,
        atoms: &atoms,
        cnf: Cnf::new(atoms.count()),
    };

    enc.exclusive_position();
    enc.held_not_available();
    enc.moves_follow_edges();
    enc.tolls_gate_entry();
    enc.pickup_on_arrival();
    enc.tolls_consume();
    enc.availability_persists_elsewhere();
    enc.availability_never_returns();
    enc.holding_needs_pickup();
    enc.holding_persists_off_toll();
    enc.start_position();
    enc.initial_availability();
    enc.goal_position();

    let cnf = enc.cnf;
    Ok(BoardCnf { cnf, atoms })
}

struct Encoder<'a> {
    problem: &'a PlanningProblem,
    atoms: &'a AtomRegistry,
    cnf: Cnf,
}

impl Encoder<'_> {
    // The player is in at most one place per time step.
    fn exclusive_position(&mut self) {
        let nodes: Vec<&String> = self.problem.graph.keys().collect();
        for i in 0..=self.problem.moves {
            for j in 0..nodes.len().saturating_sub(1) {
                for k in j + 1..nodes.len() {
                    let a = self.at(nodes[j], i);
                    let b = self.at(nodes[k], i);
                    self.cnf.add_clause(vec![a.neg(), b.neg()]);
                }
            }
        }
    }

    fn held_not_available(&mut self) {
        for prizes in self.problem.treasure_homes.values() {
            for t in prizes {
                for i in 0..=self.problem.moves {
                    let has = self.has(t, i);
                    let avail = self.available(t, i);
                    self.cnf.add_clause(vec![has.neg(), avail.neg()]);
                }
            }
        }
    }

    fn moves_follow_edges(&mut self) {
        for (node, neighbors) in &self.problem.graph {
            for i in 0..self.problem.moves {
                let mut clause = Vec::with_capacity(1 + neighbors.len());
                clause.push(self.at(node, i).neg());
                for n in neighbors {
                    clause.push(self.at(n, i + 1));
                }
                self.cnf.add_clause(clause);
            }
        }
    }

    // Entering a toll node at step i requires holding the fee at step i-1.
    fn tolls_gate_entry(&mut self) {
        for (node, fees) in &self.problem.tolls {
            for t in fees {
                for i in 1..=self.problem.moves {
                    let at = self.at(node, i);
                    let has = self.has(t, i - 1);
                    self.cnf.add_clause(vec![at.neg(), has]);
                }
            }
        }
    }

    fn pickup_on_arrival(&mut self) {
        for (home, prizes) in &self.problem.treasure_homes {
            for t in prizes {
                for i in 0..self.problem.moves {
                    let avail = self.available(t, i);
                    let at = self.at(home, i + 1);
                    let has = self.has(t, i + 1);
                    self.cnf.add_clause(vec![avail.neg(), at.neg(), has]);
                }
            }
        }
    }

    // The fee is spent on arrival: standing on a toll node and still holding
    // its fee at the same step is contradictory.
    fn tolls_consume(&mut self) {
        for (node, fees) in &self.problem.tolls {
            for t in fees {
                for i in 0..=self.problem.moves {
                    let at = self.at(node, i);
                    let has = self.has(t, i);
                    self.cnf.add_clause(vec![at.neg(), has.neg()]);
                }
            }
        }
    }

    fn availability_persists_elsewhere(&mut self) {
        let nodes: Vec<&String> = self.problem.graph.keys().collect();
        for (home, prizes) in &self.problem.treasure_homes {
            for t in prizes {
                for &node in &nodes {
                    if node == home {
                        continue;
                    }
                    for i in 0..self.problem.moves {
                        let avail = self.available(t, i);
                        let at = self.at(node, i + 1);
                        let next = self.available(t, i + 1);
                        self.cnf.add_clause(vec![avail.neg(), at.neg(), next]);
                    }
                }
            }
        }
    }

    fn availability_never_returns(&mut self) {
        for prizes in self.problem.treasure_homes.values() {
            for t in prizes {
                for i in 0..self.problem.moves {
                    let avail = self.available(t, i);
                    let next = self.available(t, i + 1);
                    self.cnf.add_clause(vec![avail, next.neg()]);
                }
            }
        }
    }

    // Holding at i+1 means holding at i or picking up at i.
    fn holding_needs_pickup(&mut self) {
        for prizes in self.problem.treasure_homes.values() {
            for t in prizes {
                for i in 0..self.problem.moves {
                    let avail = self.available(t, i);
                    let has = self.has(t, i);
                    let next = self.has(t, i + 1);
                    self.cnf.add_clause(vec![avail, has, next.neg()]);
                }
            }
        }
    }

    // Toll nodes that do not charge this treasure leave it alone.
    fn holding_persists_off_toll(&mut self) {
        for prizes in self.problem.treasure_homes.values() {
            for t in prizes {
                for (node, fees) in &self.problem.tolls {
                    if fees.contains(t) {
                        continue;
                    }
                    for i in 0..self.problem.moves {
                        let has = self.has(t, i);
                        let at = self.at(node, i + 1);
                        let next = self.has(t, i + 1);
                        self.cnf.add_clause(vec![has.neg(), at.neg(), next]);
                    }
                }
            }
        }
    }

    fn start_position(&mut self) {
        let at = self.at(&self.problem.start, 0);
        self.cnf.add_clause(vec![at]);
    }

    fn initial_availability(&mut self) {
        for prizes in self.problem.treasure_homes.values() {
            for t in prizes {
                let avail = self.available(t, 0);
                self.cnf.add_clause(vec![avail]);
            }
        }
    }

    fn goal_position(&mut self) {
        let at = self.at(&self.problem.goal, self.problem.moves);
        self.cnf.add_clause(vec![at]);
    }

    fn at(&self, node: &str, time: usize) -> Lit {
        self.lit(Atom::at(node, time))
    }

    fn available(&self, treasure: &str, time: usize) -> Lit {
        self.lit(Atom::available(treasure, time))
    }

    fn has(&self, treasure: &str, time: usize) -> Lit {
        self.lit(Atom::has(treasure, time))
    }

    fn lit(&self, atom: Atom) -> Lit {
        let id = self
            .atoms
            .id_of(&atom)
            .expect("every declared name and in-budget time is enumerated");
        Lit::pos(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn pos(var: u32) -> Self {
        Self::new(var, true)
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    pub fn signed(self) -> i64 {
        let v = self.var as i64;
        if self.sign { v } else { -v }
    }

    pub fn from_signed(v: i64) -> Option<Self> {
        if v == 0 {
            return None;
        }
        Some(Self::new(v.unsigned_abs() as u32, v > 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    pub num_vars: u32,
    pub clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn add_clause(&mut self, clause: Vec<Lit>) {
        self.clauses.push(clause);
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    // assignment is 1-based; index 0 is present but never read.
    pub fn lit_holds(lit: Lit, assignment: &[bool]) -> bool {
        let var = lit.var as usize;
        var < assignment.len() && assignment[var] == lit.sign
    }

    pub fn clause_satisfied(clause: &[Lit], assignment: &[bool]) -> bool {
        clause.iter().any(|&lit| Self::lit_holds(lit, assignment))
    }

    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.clauses
            .iter()
            .all(|clause| Self::clause_satisfied(clause, assignment))
    }
}

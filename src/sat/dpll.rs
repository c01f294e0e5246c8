use crate::cnf::{Cnf, Lit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    Sat(Vec<bool>),
    Unsat,
}

// Complete backtracking search: pure-literal elimination and unit propagation
// to a fixed point, then branch on the lowest unbound atom, true first. Every
// branch owns its own clause set and valuation; nothing is undone in place.
pub fn solve(cnf: &Cnf) -> SatResult {
    let valuation = vec![None; cnf.num_vars as usize + 1];
    match search(cnf.clauses.clone(), valuation) {
        Some(valuation) => {
            // atoms the search never needed are irrelevant; bind them true
            let model = valuation
                .into_iter()
                .map(|v| v.unwrap_or(true))
                .collect::<Vec<_>>();
            SatResult::Sat(model)
        }
        None => SatResult::Unsat,
    }
}

pub fn is_sat(cnf: &Cnf) -> bool {
    matches!(solve(cnf), SatResult::Sat(_))
}

pub fn solve_model(cnf: &Cnf) -> Option<Vec<bool>> {
    match solve(cnf) {
        SatResult::Sat(m) => Some(m),
        SatResult::Unsat => None,
    }
}

fn search(
    mut clauses: Vec<Vec<Lit>>,
    mut valuation: Vec<Option<bool>>,
) -> Option<Vec<Option<bool>>> {
    loop {
        if clauses.is_empty() {
            return Some(valuation);
        }
        if clauses.iter().any(|clause| clause.is_empty()) {
            return None;
        }
        if let Some(lit) = find_pure_literal(&clauses, valuation.len()) {
            valuation[lit.var as usize] = Some(lit.sign);
            // a pure literal satisfies every clause it appears in
            clauses.retain(|clause| !clause.contains(&lit));
        } else if let Some(lit) = find_unit(&clauses) {
            valuation[lit.var as usize] = Some(lit.sign);
            clauses = propagate(&clauses, lit);
        } else {
            break;
        }
    }

    let var = first_unbound(&valuation)?;
    let lit = Lit::pos(var);

    let mut try_true = valuation.clone();
    try_true[var as usize] = Some(true);
    if let Some(solution) = search(propagate(&clauses, lit), try_true) {
        return Some(solution);
    }

    // the false branch restarts from the pre-branch clause set
    valuation[var as usize] = Some(false);
    search(propagate(&clauses, lit.neg()), valuation)
}

// Drop clauses satisfied by lit; strip the falsified complement everywhere
// else. The literal's atom no longer occurs in the result.
fn propagate(clauses: &[Vec<Lit>], lit: Lit) -> Vec<Vec<Lit>> {
    let mut result = Vec::with_capacity(clauses.len());
    for clause in clauses {
        if clause.contains(&lit) {
            continue;
        }
        result.push(
            clause
                .iter()
                .copied()
                .filter(|l| l.var != lit.var)
                .collect::<Vec<_>>(),
        );
    }
    result
}

fn find_pure_literal(clauses: &[Vec<Lit>], num_slots: usize) -> Option<Lit> {
    let mut seen_pos = vec![false; num_slots];
    let mut seen_neg = vec![false; num_slots];
    for clause in clauses {
        for &lit in clause {
            if lit.sign {
                seen_pos[lit.var as usize] = true;
            } else {
                seen_neg[lit.var as usize] = true;
            }
        }
    }
    (1..num_slots).find_map(|var| match (seen_pos[var], seen_neg[var]) {
        (true, false) => Some(Lit::pos(var as u32)),
        (false, true) => Some(Lit::new(var as u32, false)),
        _ => None,
    })
}

fn find_unit(clauses: &[Vec<Lit>]) -> Option<Lit> {
    clauses
        .iter()
        .find(|clause| clause.len() == 1)
        .map(|clause| clause[0])
}

fn first_unbound(valuation: &[Option<bool>]) -> Option<u32> {
    (1..valuation.len())
        .find(|&i| valuation[i].is_none())
        .map(|i| i as u32)
}

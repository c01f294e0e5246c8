use anyhow::{Context, Result, bail};

use crate::atom::{Atom, AtomRegistry};

use super::cnf::{Cnf, Lit};

// Transport format between the encode and solve phases: one line of signed
// atom ids per clause, a lone `0` terminator, then the id-to-atom key. The
// solve phase appends its verdict above the same key so the decode phase can
// interpret it.

pub fn clause_file_text(cnf: &Cnf, atoms: &AtomRegistry) -> String {
    let mut out = String::new();
    for clause in &cnf.clauses {
        let line = clause
            .iter()
            .map(|lit| lit.signed().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("0\n");
    out.push_str(&key_text(atoms));
    out
}

pub fn parse_clause_file(s: &str) -> Result<(Cnf, AtomRegistry)> {
    let mut lines = s.lines().enumerate();
    let mut clauses = Vec::<Vec<Lit>>::new();
    let mut max_var = 0u32;

    for (idx, line) in lines.by_ref() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('0') {
            break;
        }
        let mut clause = Vec::new();
        for tok in trimmed.split_whitespace() {
            let val = tok
                .parse::<i64>()
                .with_context(|| format!("line {}: bad literal '{}'", line_no, tok))?;
            let lit = Lit::from_signed(val)
                .ok_or_else(|| anyhow::anyhow!("line {}: literal 0 inside clause", line_no))?;
            max_var = max_var.max(lit.var);
            clause.push(lit);
        }
        clauses.push(clause);
    }

    let atoms = parse_key(lines)?;
    if max_var > atoms.count() {
        bail!(
            "clause literal {} exceeds key size {}",
            max_var,
            atoms.count()
        );
    }

    let mut cnf = Cnf::new(atoms.count());
    for clause in clauses {
        cnf.add_clause(clause);
    }
    Ok((cnf, atoms))
}

pub fn valuation_file_text(model: Option<&[bool]>, atoms: &AtomRegistry) -> String {
    let mut out = String::new();
    if let Some(model) = model {
        let width = atoms.count().to_string().len();
        for id in 1..=atoms.count() {
            let flag = if model.get(id as usize).copied().unwrap_or(false) {
                "T"
            } else {
                "F"
            };
            out.push_str(&format!("{:>width$} {}\n", id, flag, width = width));
        }
    }
    out.push_str(&key_text(atoms));
    out
}

pub fn parse_valuation_file(s: &str) -> Result<(Option<Vec<bool>>, AtomRegistry)> {
    let mut verdicts = Vec::<(u32, bool)>::new();
    let mut key_lines = Vec::<(usize, String)>::new();

    for (idx, line) in s.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut parts = trimmed.split_whitespace();
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("line {}: expected 'id T|F' or 'id atom'", line_no);
        };
        let id = first
            .parse::<u32>()
            .with_context(|| format!("line {}: bad atom id '{}'", line_no, first))?;
        match second {
            "T" => verdicts.push((id, true)),
            "F" => verdicts.push((id, false)),
            _ => key_lines.push((line_no, format!("{} {}", id, second))),
        }
    }

    let atoms = parse_key(key_lines.iter().map(|(n, l)| (n - 1, l.as_str())))?;

    if verdicts.is_empty() {
        return Ok((None, atoms));
    }
    if verdicts.len() != atoms.count() as usize {
        bail!(
            "valuation has {} entries but key has {} atoms",
            verdicts.len(),
            atoms.count()
        );
    }
    let mut model = vec![false; atoms.count() as usize + 1];
    for (pos, (id, value)) in verdicts.iter().enumerate() {
        if *id as usize != pos + 1 {
            bail!("valuation ids out of order at id {}", id);
        }
        model[*id as usize] = *value;
    }
    Ok((Some(model), atoms))
}

pub fn symbolic_clause_text(cnf: &Cnf, atoms: &AtomRegistry) -> Result<String> {
    let mut out = String::new();
    for clause in &cnf.clauses {
        let mut parts = Vec::with_capacity(clause.len());
        for lit in clause {
            let atom = atoms
                .atom_of(lit.var)
                .ok_or_else(|| anyhow::anyhow!("clause references unmapped atom {}", lit.var))?;
            if lit.sign {
                parts.push(atom.to_string());
            } else {
                parts.push(format!("-{}", atom));
            }
        }
        out.push_str(&parts.join(" "));
        out.push('\n');
    }
    Ok(out)
}

fn key_text(atoms: &AtomRegistry) -> String {
    let mut out = String::new();
    let width = atoms.count().to_string().len();
    for (atom, id) in atoms.iter() {
        out.push_str(&format!("{:>width$} {}\n", id, atom, width = width));
    }
    out
}

fn parse_key<'a, I>(lines: I) -> Result<AtomRegistry>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut atoms = AtomRegistry::default();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut parts = trimmed.split_whitespace();
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("line {}: expected 'id atom'", line_no);
        };
        let id = first
            .parse::<u32>()
            .with_context(|| format!("line {}: bad atom id '{}'", line_no, first))?;
        let atom = Atom::parse(second).with_context(|| format!("line {}: bad atom", line_no))?;
        let assigned = atoms.insert(atom);
        if assigned != id {
            bail!(
                "line {}: key id {} does not match enumeration position {}",
                line_no,
                id,
                assigned
            );
        }
    }
    Ok(atoms)
}

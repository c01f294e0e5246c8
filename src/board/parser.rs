use std::io::BufRead;

use anyhow::{Context, Result, bail};
use indexmap::IndexSet;

use super::problem::PlanningProblem;

// Board description grammar:
//   line 1: location names
//   line 2: treasure names
//   line 3: move budget
//   then one line per location:
//     NAME TREASURES t* TOLLS t* NEXT n*
// Blank lines after the header are ignored. GOAL's NEXT list gets a
// self-loop added if the description leaves it out.

pub fn parse_board_str(s: &str) -> Result<PlanningProblem> {
    parse_board_reader(std::io::Cursor::new(s.as_bytes()))
}

pub fn parse_board_reader<R: BufRead>(r: R) -> Result<PlanningProblem> {
    let mut problem = PlanningProblem::default();
    let mut seen = 0usize;

    // the three header lines are positional; only node lines may be blank
    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.context("failed to read board line")?;
        let trimmed = line.trim();

        match idx {
            0 => problem.locations = tokens_of(trimmed),
            1 => problem.treasures = tokens_of(trimmed),
            2 => {
                problem.moves = trimmed.parse::<usize>().with_context(|| {
                    format!("line {}: invalid move budget '{}'", line_no, trimmed)
                })?;
            }
            _ => {
                if trimmed.is_empty() {
                    continue;
                }
                parse_node_line(&mut problem, trimmed)
                    .with_context(|| format!("line {}: invalid node description", line_no))?;
            }
        }
        seen = line_no;
    }

    if seen < 3 {
        bail!("board description ended before the move budget line");
    }

    problem.synthesize_goal_self_loop();
    Ok(problem)
}

fn parse_node_line(problem: &mut PlanningProblem, line: &str) -> Result<()> {
    let tokens = tokens_of(line);
    let Some(node) = tokens.first() else {
        bail!("empty node line");
    };
    if problem.graph.contains_key(node) {
        bail!("redefinition of node '{}'", node);
    }

    let mut rest = tokens[1..].iter();
    match rest.next().map(String::as_str) {
        Some("TREASURES") => {}
        _ => bail!("expected TREASURES after node name"),
    }

    let mut prizes = IndexSet::new();
    let mut saw_tolls = false;
    for tok in rest.by_ref() {
        if tok == "TOLLS" {
            saw_tolls = true;
            break;
        }
        prizes.insert(tok.clone());
    }
    if !saw_tolls {
        bail!("expected TOLLS in node '{}'", node);
    }

    let mut fees = IndexSet::new();
    let mut saw_next = false;
    for tok in rest.by_ref() {
        if tok == "NEXT" {
            saw_next = true;
            break;
        }
        fees.insert(tok.clone());
    }
    if !saw_next {
        bail!("expected NEXT in node '{}'", node);
    }

    let mut neighbors = IndexSet::new();
    for tok in rest {
        neighbors.insert(tok.clone());
    }

    problem.treasure_homes.insert(node.clone(), prizes);
    problem.tolls.insert(node.clone(), fees);
    problem.graph.insert(node.clone(), neighbors);
    Ok(())
}

fn tokens_of(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

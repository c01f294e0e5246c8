use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mazesat::board::parse_board_str;
use mazesat::cnf::text::{
    clause_file_text, parse_clause_file, parse_valuation_file, symbolic_clause_text,
    valuation_file_text,
};
use mazesat::encode::encode_board;
use mazesat::plan::{narrate, narrate_unsat, project};
use mazesat::sat::{SatResult, solve};

#[derive(Parser, Debug)]
#[command(name = "mazesat")]
#[command(about = "Maze adventure planner compiled to SAT")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a board, decide it, and print the move list
    Plan {
        #[arg(long)]
        board: String,
        #[arg(long)]
        out: Option<String>,
        #[arg(long)]
        symbolic: Option<String>,
    },
    /// Compile a board into a clause-plus-key file
    Encode {
        #[arg(long)]
        board: String,
        #[arg(long)]
        out: String,
        #[arg(long)]
        symbolic: Option<String>,
    },
    /// Decide a clause-plus-key file and write the valuation file
    Solve {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Turn a valuation file into a move list
    Decode {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Plan {
            board,
            out,
            symbolic,
        } => {
            let text = read(&board)?;
            let problem = parse_board_str(&text)?;
            let encoded = encode_board(&problem)?;
            if let Some(path) = symbolic {
                write(&path, &symbolic_clause_text(&encoded.cnf, &encoded.atoms)?)?;
            }
            let narrative = match solve(&encoded.cnf) {
                SatResult::Sat(model) => {
                    let steps = project(&model, &encoded.atoms)?;
                    narrate(&steps)
                }
                SatResult::Unsat => narrate_unsat(),
            };
            emit(out.as_deref(), &narrative)?;
        }
        Commands::Encode {
            board,
            out,
            symbolic,
        } => {
            let text = read(&board)?;
            let problem = parse_board_str(&text)?;
            let encoded = encode_board(&problem)?;
            if let Some(path) = symbolic {
                write(&path, &symbolic_clause_text(&encoded.cnf, &encoded.atoms)?)?;
            }
            write(&out, &clause_file_text(&encoded.cnf, &encoded.atoms))?;
            println!(
                "ENCODE: wrote {} | atoms={} clauses={}",
                out,
                encoded.atoms.count(),
                encoded.cnf.num_clauses()
            );
        }
        Commands::Solve { input, out } => {
            let text = read(&input)?;
            let (cnf, atoms) = parse_clause_file(&text)?;
            let (verdict, model) = match solve(&cnf) {
                SatResult::Sat(model) => ("SAT", Some(model)),
                SatResult::Unsat => ("UNSAT", None),
            };
            write(&out, &valuation_file_text(model.as_deref(), &atoms))?;
            println!("SOLVE: {} | wrote {}", verdict, out);
        }
        Commands::Decode { input, out } => {
            let text = read(&input)?;
            let (model, atoms) = parse_valuation_file(&text)?;
            let narrative = match model {
                Some(model) => {
                    let steps = project(&model, &atoms)?;
                    narrate(&steps)
                }
                None => narrate_unsat(),
            };
            emit(out.as_deref(), &narrative)?;
        }
    }
    Ok(())
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
}

fn write(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path))
}

fn emit(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => write(path, content),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

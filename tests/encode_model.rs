use mazesat::atom::Atom;
use mazesat::board::parse_board_str;
use mazesat::cnf::Lit;
use mazesat::encode::encode_board;

const BOARD: &str = "\
START HALL GOAL
KEY
2
START TREASURES TOLLS NEXT HALL
HALL TREASURES KEY TOLLS NEXT START GOAL
GOAL TREASURES TOLLS KEY NEXT
";

#[test]
fn atom_count_covers_every_object_and_step() {
    let encoded = encode(BOARD);
    // 3 locations + 2 kinds for 1 treasure, each over 3 time steps
    assert_eq!(encoded.atoms.count(), 15);
    assert_eq!(encoded.cnf.num_vars, 15);
}

#[test]
fn clause_count_matches_the_board() {
    let encoded = encode(BOARD);
    assert_eq!(encoded.cnf.num_clauses(), 40);
}

#[test]
fn encoding_is_deterministic() {
    let a = encode(BOARD);
    let b = encode(BOARD);
    assert_eq!(a.cnf, b.cnf);
    assert_eq!(a.atoms, b.atoms);
}

#[test]
fn position_mutexes_come_first_time_major() {
    let encoded = encode(BOARD);
    // time 0 pairs over graph order START, HALL, GOAL
    let at = |node: &str, time| pos(&encoded, &Atom::at(node, time));
    assert_eq!(
        encoded.cnf.clauses[0],
        vec![at("START", 0).neg(), at("HALL", 0).neg()]
    );
    assert_eq!(
        encoded.cnf.clauses[1],
        vec![at("START", 0).neg(), at("GOAL", 0).neg()]
    );
    assert_eq!(
        encoded.cnf.clauses[2],
        vec![at("HALL", 0).neg(), at("GOAL", 0).neg()]
    );
    assert_eq!(
        encoded.cnf.clauses[3],
        vec![at("START", 1).neg(), at("HALL", 1).neg()]
    );
}

#[test]
fn movement_clauses_follow_the_adjacency_lists() {
    let encoded = encode(BOARD);
    let at = |node: &str, time| pos(&encoded, &Atom::at(node, time));
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[at("START", 0).neg(), at("HALL", 1)]
    ));
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[at("HALL", 1).neg(), at("START", 2), at("GOAL", 2)]
    ));
    // synthesized self-loop shows up in GOAL's movement clause
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[at("GOAL", 0).neg(), at("GOAL", 1)]
    ));
}

#[test]
fn toll_clauses_gate_and_consume() {
    let encoded = encode(BOARD);
    let at = |node: &str, time| pos(&encoded, &Atom::at(node, time));
    let has = |t: &str, time| pos(&encoded, &Atom::has(t, time));
    for i in 1..=2usize {
        assert!(has_clause(
            &encoded.cnf.clauses,
            &[at("GOAL", i).neg(), has("KEY", i - 1)]
        ));
    }
    for i in 0..=2usize {
        assert!(has_clause(
            &encoded.cnf.clauses,
            &[at("GOAL", i).neg(), has("KEY", i).neg()]
        ));
    }
}

#[test]
fn pickup_and_persistence_clauses_cover_the_treasure() {
    let encoded = encode(BOARD);
    let at = |node: &str, time| pos(&encoded, &Atom::at(node, time));
    let has = |t: &str, time| pos(&encoded, &Atom::has(t, time));
    let avail = |t: &str, time| pos(&encoded, &Atom::available(t, time));

    // arriving at the home of an available treasure picks it up
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[avail("KEY", 0).neg(), at("HALL", 1).neg(), has("KEY", 1)]
    ));
    // availability survives visits away from home
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[avail("KEY", 0).neg(), at("START", 1).neg(), avail("KEY", 1)]
    ));
    // gone stays gone
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[avail("KEY", 0), avail("KEY", 1).neg()]
    ));
    // holding tomorrow needs holding or pickup today
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[avail("KEY", 1), has("KEY", 1), has("KEY", 2).neg()]
    ));
    // nodes that do not charge KEY leave it in hand
    assert!(has_clause(
        &encoded.cnf.clauses,
        &[has("KEY", 0).neg(), at("START", 1).neg(), has("KEY", 1)]
    ));
}

#[test]
fn unit_clauses_close_out_the_encoding() {
    let encoded = encode(BOARD);
    let n = encoded.cnf.num_clauses();
    let at = |node: &str, time| pos(&encoded, &Atom::at(node, time));
    let avail = |t: &str, time| pos(&encoded, &Atom::available(t, time));
    assert_eq!(encoded.cnf.clauses[n - 3], vec![at("START", 0)]);
    assert_eq!(encoded.cnf.clauses[n - 2], vec![avail("KEY", 0)]);
    assert_eq!(encoded.cnf.clauses[n - 1], vec![at("GOAL", 2)]);
}

#[test]
fn zero_budget_collapses_the_step_families() {
    let board = "\
START GOAL

0
START TREASURES TOLLS NEXT GOAL
GOAL TREASURES TOLLS NEXT GOAL
";
    let encoded = encode(board);
    // one mutex pair at time 0 plus the two position units
    assert_eq!(encoded.cnf.num_clauses(), 3);
    let at = |node: &str, time| pos(&encoded, &Atom::at(node, time));
    assert_eq!(
        encoded.cnf.clauses[0],
        vec![at("START", 0).neg(), at("GOAL", 0).neg()]
    );
    assert_eq!(encoded.cnf.clauses[1], vec![at("START", 0)]);
    assert_eq!(encoded.cnf.clauses[2], vec![at("GOAL", 0)]);
}

fn encode(board: &str) -> mazesat::encode::BoardCnf {
    let problem = parse_board_str(board).expect("parse board");
    encode_board(&problem).expect("encode board")
}

fn pos(encoded: &mazesat::encode::BoardCnf, atom: &Atom) -> Lit {
    Lit::pos(encoded.atoms.id_of(atom).expect("atom is enumerated"))
}

fn has_clause(clauses: &[Vec<Lit>], wanted: &[Lit]) -> bool {
    clauses.iter().any(|clause| clause == wanted)
}

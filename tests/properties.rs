use backtracking::InvalidInput;
use backtracking::problems::n_queens::NQueens;
use backtracking::problems::parentheses::Parentheses;
use backtracking::problems::sudoku::{Board, EXAMPLE_NINE, is_solved, solve_board};
use backtracking::problems::{
    all_possible_valid_parentheses, combination_sum, hamiltonian_cycle, knights_tour,
    magic_square, n_queens, palindrome_partitioning, permutations, rat_in_maze,
    string_pattern_matching, subset_sum, sudoku_solver, word_search,
};
use backtracking::search::{Backtracker, Count, Problem};
use backtracking::BACKTRACKING_ALGORITHM_PROPERTIES;

#[test]
fn test_results_are_deterministic() {
    assert_eq!(n_queens(6), n_queens(6));
    assert_eq!(permutations(&[3, 1, 2]), permutations(&[3, 1, 2]));
    assert_eq!(subset_sum(&[4, 2, 6, 1], 7), subset_sum(&[4, 2, 6, 1], 7));
    assert_eq!(knights_tour(5), knights_tour(5));
}

#[test]
fn test_reused_backtracker_starts_clean() {
    let mut search = Backtracker::new(NQueens::new(8).unwrap());
    let first = search.solve().unwrap();
    let all = search.solve_all();
    assert_eq!(all.len(), 92);
    assert_eq!(all[0], first);
    assert_eq!(search.count(), 92);
    assert_eq!(search.stats().solutions, 92);
}

#[test]
fn test_limited_run_is_a_prefix() {
    let mut search = Backtracker::new(Parentheses::new(5));
    let all = search.solve_all();
    for k in [1, 5, 42, 100] {
        let limited = search.solve_limited(k);
        assert_eq!(limited, all[..k.min(all.len())]);
    }
}

#[test]
fn test_count_sink_matches_enumeration() {
    let mut search = Backtracker::new(Parentheses::new(6));
    let mut sink = Count::default();
    assert!(!search.run(&mut sink));
    assert_eq!(sink.get(), search.solve_all().len());
    assert_eq!(search.problem().name(), "valid parentheses");
}

#[test]
fn test_queens_boundaries() {
    assert_eq!(n_queens(1), Ok(vec![vec![0]]));
    assert_eq!(n_queens(2), Ok(vec![]));
    assert_eq!(n_queens(3), Ok(vec![]));
    assert_eq!(n_queens(0), Err(InvalidInput::NotPositive { what: "n" }));
}

#[test]
fn test_sudoku_round_trip() {
    let mut board = Board::from(EXAMPLE_NINE);
    assert_eq!(sudoku_solver(&mut board), Ok(true));
    assert!(is_solved(&board));

    let mut four = Board::new(vec![vec![0; 4]; 4]);
    assert!(sudoku_solver(&mut four).is_err());
    assert_eq!(solve_board(&mut four), Ok(true));
    assert!(is_solved(&four));
}

#[test]
fn test_empty_inputs() {
    assert_eq!(subset_sum(&[], 0), vec![Vec::<i64>::new()]);
    assert_eq!(combination_sum(&[], 0), Ok(vec![vec![]]));
    assert_eq!(permutations::<u8>(&[]), vec![Vec::<u8>::new()]);
    assert_eq!(palindrome_partitioning(""), vec![Vec::<String>::new()]);
    assert_eq!(all_possible_valid_parentheses(0), vec![String::new()]);
    assert!(string_pattern_matching("", ""));
    assert_eq!(word_search(&[], "A"), Ok(false));
}

#[test]
fn test_unsolvable_inputs_are_not_errors() {
    assert_eq!(rat_in_maze(&[vec![0, 1], vec![1, 1]]), Ok(vec![]));
    assert_eq!(
        hamiltonian_cycle(&[vec![0, 1], vec![1, 0]]),
        Ok(Some(vec![0, 1, 0]))
    );
    assert_eq!(magic_square(2), Ok(None));
    assert_eq!(knights_tour(3), Ok(None));
    assert!(subset_sum(&[5, 6], 3).is_empty());
}

#[test]
fn test_malformed_inputs_are_rejected() {
    assert!(matches!(
        rat_in_maze(&[vec![1, 1], vec![1]]),
        Err(InvalidInput::NotSquare { .. })
    ));
    assert!(matches!(
        rat_in_maze(&[vec![1, 2], vec![1, 1]]),
        Err(InvalidInput::OutOfRange { value: 2, .. })
    ));
    assert!(matches!(
        hamiltonian_cycle(&[]),
        Err(InvalidInput::Empty { .. })
    ));
    assert!(matches!(
        combination_sum(&[2, -3], 5),
        Err(InvalidInput::NonPositiveCandidate { index: 1, value: -3 })
    ));
    assert!(matches!(
        word_search(&[vec!['A', 'B'], vec!['C']], "AB"),
        Err(InvalidInput::Ragged { row: 1, .. })
    ));
}

#[test]
fn test_algorithm_properties() {
    assert_eq!(BACKTRACKING_ALGORITHM_PROPERTIES.len(), 4);
    assert!(BACKTRACKING_ALGORITHM_PROPERTIES[1].contains("Backtracks"));
}

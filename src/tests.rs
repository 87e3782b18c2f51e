use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::game::{Board, Move};
use crate::report::render_table;
use crate::solver::arena::Arena;
use crate::solver::{solve, solve_all, SearchResult, Strategy, NODE_CAP};

/// One blank slide to the left away from the goal.
const ONE_MOVE: [[u8; 3]; 3] = [[1, 0, 2], [3, 4, 5], [6, 7, 8]];

/// The goal with tiles 7 and 8 swapped: odd permutation parity, so no
/// move sequence reaches the goal.
const UNSOLVABLE: [[u8; 3]; 3] = [[0, 1, 2], [3, 4, 5], [6, 8, 7]];

#[test]
fn test_solved_root_is_reported_immediately() {
    for strategy in Strategy::ALL {
        let result = solve(strategy, &Board::goal());
        assert_eq!(result.strategy, strategy);
        assert_eq!(result.nodes_expanded, 1);
        assert_eq!(result.cost, 0);
        assert_eq!(result.path, Some(vec![]));
    }
}

#[test]
fn test_one_move_board_bfs_and_ucs() {
    let board = Board::new(ONE_MOVE).unwrap();
    for strategy in [Strategy::Bfs, Strategy::Ucs] {
        let result = solve(strategy, &board);
        assert_eq!(result.cost, 1);
        assert_eq!(result.path, Some(vec![Move::Left]));
        assert!(result.nodes_expanded <= 3);
    }
}

#[test]
fn test_one_move_board_idfs() {
    let board = Board::new(ONE_MOVE).unwrap();
    let result = solve(Strategy::Idfs, &board);
    assert_eq!(result.cost, 1);
    assert_eq!(result.path, Some(vec![Move::Left]));
    // limit-0 run expands the root once, the limit-1 run expands the
    // root plus two children, the second of which is the goal
    assert_eq!(result.nodes_expanded, 4);
}

#[test]
fn test_bfs_and_ucs_find_equal_costs() {
    for seed in [1, 2, 3] {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let board = Board::scrambled(&mut rng, 6);

        let bfs = solve(Strategy::Bfs, &board);
        let ucs = solve(Strategy::Ucs, &board);
        assert!(bfs.cost >= 0);
        assert!(bfs.cost <= 6);
        assert_eq!(bfs.cost, ucs.cost);

        // iterative deepening first succeeds at the optimal depth
        let idfs = solve(Strategy::Idfs, &board);
        assert_eq!(idfs.cost, bfs.cost);

        // depth-first paths are never shorter than optimal
        let dfs = solve(Strategy::Dfs, &board);
        assert!(dfs.cost == -1 || dfs.cost >= bfs.cost);
    }
}

#[test]
fn test_found_paths_replay_to_the_goal() {
    let mut rng = Pcg64Mcg::seed_from_u64(7);
    let initial = Board::scrambled(&mut rng, 6);
    for result in solve_all(&initial) {
        let Some(path) = &result.path else { continue };
        assert_eq!(path.len() as i64, result.cost);

        let mut board = initial;
        for &mv in path {
            board = board.slide(mv).expect("reported paths only use legal moves");
        }
        assert!(board.is_goal(), "{} path did not reach the goal", result.strategy);
    }
}

#[test]
fn test_unsolvable_board_exhausts_the_cap() {
    let board = Board::new(UNSOLVABLE).unwrap();
    for result in solve_all(&board) {
        assert_eq!(result.nodes_expanded, NODE_CAP, "{}", result.strategy);
        assert_eq!(result.cost, -1);
        assert_eq!(result.path, None);
    }
}

#[test]
fn test_runs_are_deterministic() {
    let mut rng = Pcg64Mcg::seed_from_u64(42);
    let board = Board::scrambled(&mut rng, 10);
    assert_eq!(solve_all(&board), solve_all(&board));
}

#[test]
fn test_arena_path_reconstruction() {
    let (mut arena, root) = Arena::root(Board::goal());
    assert_eq!(arena.path_to(root), vec![]);

    let children = arena.expand(root);
    assert_eq!(children.len(), 2);
    let grandchildren = arena.expand(children[0]);
    assert_eq!(grandchildren.len(), 3);
    assert_eq!(arena.len(), 6);

    let leaf = grandchildren[2];
    let path = arena.path_to(leaf);
    assert_eq!(path.len(), 2);
    assert_eq!(arena.get(leaf).cost, 2);

    let mut board = Board::goal();
    for &mv in &path {
        board = board.slide(mv).unwrap();
    }
    assert_eq!(board, arena.get(leaf).board);
}

#[test]
fn test_table_rendering() {
    let results = vec![
        SearchResult {
            strategy: Strategy::Bfs,
            nodes_expanded: 3,
            cost: 1,
            path: Some(vec![Move::Left]),
        },
        SearchResult {
            strategy: Strategy::Dfs,
            nodes_expanded: NODE_CAP,
            cost: -1,
            path: None,
        },
    ];
    let table = render_table(&results);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Method"));
    assert!(lines[0].ends_with("Path"));
    assert!(lines[1].chars().all(|c| c == '-'));
    assert!(lines[2].starts_with("BFS"));
    assert!(lines[2].ends_with("LEFT"));
    assert!(lines[3].starts_with("DFS"));
    assert!(lines[3].contains("-1"));
    assert!(lines[3].ends_with(" -"));
}

#[test]
fn test_result_survives_json_round_trip() {
    let board = Board::new(ONE_MOVE).unwrap();
    let result = solve(Strategy::Bfs, &board);
    let json = serde_json::to_string(&result).expect("results serialize");
    let back: SearchResult = serde_json::from_str(&json).expect("results deserialize");
    assert_eq!(result, back);
}

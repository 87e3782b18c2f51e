use std::io;
use std::process::exit;
use std::time::Instant;

use eight_puzzle::game::Board;
use eight_puzzle::report::print_results;
use eight_puzzle::solver::solve_all;

fn main() {
    let initial = match Board::new([[7, 2, 4], [5, 0, 6], [8, 3, 1]]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("bad initial board: {}", err);
            exit(1);
        }
    };
    println!("Initial board:\n{}", initial);

    let now = Instant::now();
    let results = solve_all(&initial);
    if let Err(err) = print_results(&mut io::stdout(), &results) {
        eprintln!("couldn't write the results table: {}", err);
        exit(1);
    }
    println!("The solver took {} seconds.", now.elapsed().as_secs_f64());
}

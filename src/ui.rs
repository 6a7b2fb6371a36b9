#![cfg(feature = "std")]

use crate::{config::GRID_SIZE, game::GameState};

/// Print a game snapshot: the grid with empty cells left blank, then the
/// running score underneath.
pub fn print_board(state: &GameState) {
    let border: String = {
        let mut b = "+------".repeat(GRID_SIZE);
        b.push('+');
        b
    };
    println!("{}", border);
    for row in state.cells.iter() {
        for &value in row.iter() {
            if value == 0 {
                print!("|      ");
            } else {
                print!("|{:>5} ", value);
            }
        }
        println!("|");
        println!("{}", border);
    }
    println!("Score: {}", state.score);
}

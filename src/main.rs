//! chess_solver UCI engine

use chess_solver::uci::UCI;
use log::{error, info};

fn main() {
    env_logger::init();
    info!("chess_solver {} - UCI chess engine", env!("CARGO_PKG_VERSION"));

    let mut uci = UCI::new();
    if let Err(e) = uci.run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

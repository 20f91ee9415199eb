use arena::{play_match, MatchConfig};
use std::error::Error;

mod arena;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::debug!(path = %path, "loading match config");
            MatchConfig::load_from_json(&std::fs::read_to_string(path)?)?
        }
        None => MatchConfig::default(),
    };

    let result = play_match(&config);
    println!("{}", result.board);
    println!(
        "{} wins after {} moves: {}",
        result.winner,
        result.history.len(),
        result.reason
    );
    Ok(())
}

//! Perft (performance test) for move generation correctness verification.

use crate::game::GameState;

/// Count the number of leaf nodes of the legal-move tree at `depth`.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without playing them.
pub fn perft(state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (id, to) in moves {
        let mut child = state.clone();
        child.advance(id, to);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Run perft with a per-move breakdown.
///
/// Returns `(move, node_count)` pairs, moves written as origin and
/// destination squares (e.g. `"e2e4"`), sorted alphabetically.
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = state
        .legal_moves()
        .into_iter()
        .map(|(id, to)| {
            let mut child = state.clone();
            let record = child.advance(id, to);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (record.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

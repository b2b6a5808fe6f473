//! Score-driven search context: bridges the generator's placement list and the DLX solver,
//! owning `current_score`/`best_score`/`graph` bookkeeping and the pruning heuristic chain.

mod context;
mod heuristics;
mod solution;

pub use context::SearchContext;
pub use heuristics::Heuristic;

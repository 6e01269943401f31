mod cell;
mod grid;
mod rules;

pub use cell::Cell;
pub use grid::{Grid, GridPair, PARALLEL_THRESHOLD};
pub use rules::{Rule, StandardRule, Bays4555Rule, Bays5766Rule, all_rules, default_rule};

use bc_core::{Cell, Direction};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrafficError {
    #[error("cannot spawn on {cell}: not a street tile")]
    NotStreet { cell: Cell },

    #[error("cannot spawn on {cell} heading {dir}: no street in that direction")]
    BlockedHeading { cell: Cell, dir: Direction },

    #[error("invalid speed {0}: must be positive and finite")]
    InvalidSpeed(f64),

    #[error("grid has no street tile with an open neighbour")]
    NoSpawnableCell,
}

pub type TrafficResult<T> = Result<T, TrafficError>;

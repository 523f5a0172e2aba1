use bc_core::CoreError;
use bc_grid::GridError;
use bc_traffic::TrafficError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("spawn error: {0}")]
    Traffic(#[from] TrafficError),
}

pub type SimResult<T> = Result<T, SimError>;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LearnError {
    #[error("learning rate must be in (0, 1], got {0}")]
    InvalidLearningRate(f64),

    #[error("observation window must hold at least one sample, got {0}")]
    InvalidWindowSize(usize),
}

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("iteration count {iterations} exceeds maximum of {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

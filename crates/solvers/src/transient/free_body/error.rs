use thiserror::Error;

/// Errors that can occur before a free-body run starts.
///
/// Once a run is underway no step can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

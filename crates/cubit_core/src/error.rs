use thiserror::Error;

/// Errors surfaced by sampling helpers and ambient configuration.
///
/// The bit engine itself never fails; these only arise from caller-supplied
/// arguments or from reconfiguring the process-wide factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("cannot draw {count} distinct values from [{low}, {high})")]
    InsufficientRange { count: usize, low: i32, high: i32 },

    #[error("die size must be between 1 and i32::MAX (got {die_size})")]
    InvalidDie { die_size: u32 },

    #[error("the ambient random factory has already been set or latched")]
    FactoryAlreadySet,

    #[error("window {offset}..{offset}+{length} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        length: usize,
        len: usize,
    },
}

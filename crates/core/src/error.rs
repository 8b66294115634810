use thiserror::Error;

/// Errors returned by the checked accessors of [`Vector`] and [`Matrix`].
///
/// Indexing with `[]` treats an out-of-bounds index as a programming error and
/// panics; `get` and `set` report it as a value instead.
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("component index {index} out of bounds for a vector of length {len}")]
    Component { index: usize, len: usize },

    #[error("entry ({col}, {row}) out of bounds for a matrix with {cols} columns and {rows} rows")]
    Entry {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

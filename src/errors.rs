//! Train construction errors

use std::fmt::Display;

/// All the ways assembling a gear train can fail.
///
/// Every variant is a caller error on a single call: the train is left
/// untouched and the same call never succeeds on retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    /// (InvalidTeethCount) A gear must have more than 2 teeth to mesh
    InvalidTeethCount(u32),
    /// (InvalidParent) The parent id does not name an existing node
    InvalidParent(usize),
    /// (RootAlreadyExists) The train already has a root gear
    RootAlreadyExists,
}

impl Display for TrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainError::InvalidTeethCount(teeth) => write!(
                f,
                "(InvalidTeethCount) A gear must have more than 2 teeth to mesh, got: {}",
                teeth
            ),
            TrainError::InvalidParent(parent) => write!(
                f,
                "(InvalidParent) The parent id does not name an existing node: {}",
                parent
            ),
            TrainError::RootAlreadyExists => {
                write!(f, "(RootAlreadyExists) The train already has a root gear")
            },
        }
    }
}

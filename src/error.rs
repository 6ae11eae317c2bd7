use crate::dataset::{DatasetError, LocationId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThermomapError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("No {0} in the loaded dataset")]
    UnknownLocation(LocationId),
}

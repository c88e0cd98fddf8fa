use thiserror::Error;

use crate::deal::PoolError;
use crate::model::LevelError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

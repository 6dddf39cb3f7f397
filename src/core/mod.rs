pub mod resolver;

pub use crate::domain::model::{InputFileReference, InputSource};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;

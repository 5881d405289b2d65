//! Application layer: outline reading and queries
//!
//! This layer turns text into trees and back. The container itself lives in
//! the domain layer and never touches I/O.

pub mod error;
pub mod error_ext;
pub mod outline;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use outline::{Outline, OutlineFormat, OutlineTree, RenderOptions};

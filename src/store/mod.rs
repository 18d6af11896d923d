pub mod catalog;
pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use catalog::*;
pub use error::*;
pub use json_file::*;
pub use memory::*;
pub use traits::*;

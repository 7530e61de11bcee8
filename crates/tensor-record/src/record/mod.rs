mod base;
mod codec;
mod error;
mod file;
mod memory;
mod primitive;
mod recorder;
mod tensor;

pub use base::*;
pub use codec::*;
pub use error::*;
pub use file::*;
pub use memory::*;
pub use recorder::*;
pub use tensor::*;

mod base;
mod data;
mod dtype;
mod element;
mod error;
mod shape;

pub use base::*;
pub use data::*;
pub use dtype::*;
pub use element::*;
pub use error::*;
pub use shape::*;

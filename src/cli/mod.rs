pub mod cipher;
pub mod deck;
pub mod source;

pub use cipher::*;
pub use deck::*;
pub use source::*;

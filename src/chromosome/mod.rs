//! Chromosome model, decoder and encoder.

pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod types;

pub use decoder::decode;
pub use encoder::encode;
pub use types::{Chromosome, Header, Node, NodeId, Ref};

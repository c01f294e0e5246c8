pub mod encoder;

pub use encoder::{BoardCnf, encode_board};

//! Block, material, and face types shared by every sandbox crate.
#![forbid(unsafe_code)]

pub mod material;
pub mod types;

pub use material::{MaterialKind, UnknownMaterial};
pub use types::{Block, BlockPos, Face};

pub mod interface;

pub use interface::{ArcadeInterface, InterfaceStatus};

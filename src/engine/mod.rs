// Queue and encode engine - independent of the terminal session

pub mod core;

pub use core::*;

#![doc = include_str!("../README.md")]

pub mod content;
pub mod date;
pub mod html;
pub mod index;
pub mod post;
mod site;
mod storage;

pub use site::*;
pub use storage::*;

#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod vector;
pub use vector::*;

pub mod matrix;
pub use matrix::*;

#[cfg(test)]
mod tests;

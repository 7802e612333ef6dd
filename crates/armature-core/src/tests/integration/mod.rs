#![cfg(test)]

pub mod common;
pub mod bootstrap_tests;

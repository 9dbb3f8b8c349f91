//! The `evolution` module contains the building blocks for evolving
//! biochemical reaction networks by randomised mutation: typed parameter
//! sampling, the mutable network graph and the mutation engine operating on
//! both.

pub mod helper;
pub mod mutation;
pub mod network;
pub mod parameter;

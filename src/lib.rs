#[cfg_attr(test, macro_use)]
extern crate approx;
#[macro_use]
extern crate lazy_static;

/// The `evolution` module contains functionality related to the mutation of
/// evolving biochemical reaction networks.
pub mod evolution;

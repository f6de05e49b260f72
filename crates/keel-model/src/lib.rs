//! Message and resource model shared by the keel components.
//!
//! Everything in this crate is plain owned data with serde derives. The wire
//! shape of the union-like messages ([`Secret`], [`Variable`], [`Volume`]) is
//! a declared kind plus independent optional payload fields, so ill-formed
//! combinations arriving from external clients are representable here and are
//! rejected by `keel-validation` at admission time.

mod domain;
pub use domain::*;

//! An embedded, persistent hypergraph store: atoms and edges rendered as balanced-paren text,
//! indexed by every permutation of an edge's direct children so pattern and star queries reduce
//! to backend range scans.

#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod attr;
#[doc(hidden)]
pub mod cnf;
pub mod elem;
#[doc(hidden)]
pub mod err;
mod graph;
mod index;
#[doc(hidden)]
pub mod key;
#[doc(hidden)]
pub mod kvs;
pub mod perm;

pub use attr::{AttrRecord, AttrValue};
pub use elem::Element;
pub use err::Error;
pub use graph::{Config, HyperGraph};

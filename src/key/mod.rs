//! How keys are structured in the key-value store.
//!
//! crate::key::vkey   "v" || render(element)
//! crate::key::pkey   "p" || render(perm_k(edge).children, joined by a space) || 0x00 || k (u32 BE)
pub mod debug;
pub mod pkey;
pub mod vkey;

//! Closed variant types of up to nine slots.
//!
//! Every union is an `enum` with one variant per slot. Values are consumed
//! either by side-effecting dispatch ([`continued`](Union2::continued)) or by
//! value-producing dispatch ([`join`](Union2::join)), both of which take one
//! handler per slot.

#[macro_use]
mod macros;

pub mod factories;
pub mod generic;
mod union;
pub mod unions;

pub use generic::*;
pub use union::*;
pub use unions::*;

mod either;
mod maybe;
mod try_;

pub use either::*;
pub use maybe::*;
pub use try_::*;

mod union0;
mod union1;
mod union2;
mod union3;
mod union4;
mod union5;
mod union6;
mod union7;
mod union8;
mod union9;

pub use union0::*;
pub use union1::*;
pub use union2::*;
pub use union3::*;
pub use union4::*;
pub use union5::*;
pub use union6::*;
pub use union7::*;
pub use union8::*;
pub use union9::*;

pub mod definition;
pub mod source;
pub mod stat;

pub use definition::*;
pub use source::*;
pub use stat::*;

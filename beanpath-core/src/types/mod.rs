//! Class descriptors and the type tokens resolved from them

mod class;
pub use class::*;

mod method;
pub use method::*;

mod generic;
pub use generic::*;

mod token;
pub use token::*;

mod primitive;
pub use primitive::*;

mod value;
pub use value::*;

mod core;
pub use self::core::*;
mod gemv;
mod lu;
pub(crate) use self::lu::*;

mod binding;
mod core;
mod parameter;

pub use self::binding::*;
pub use self::core::*;
pub use self::parameter::*;

mod core;
mod model;
mod registry;

pub(crate) use self::core::*;
pub(crate) use registry::*;

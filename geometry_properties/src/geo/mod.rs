mod accessors;
mod geometry;
mod properties;
mod value;

pub use accessors::*;
pub use geometry::*;
pub use properties::*;
pub use value::*;

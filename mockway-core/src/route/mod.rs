mod error;
mod spec;
mod table;

pub use error::RouteError;
pub use spec::RouteSpec;
pub use table::{RouteEntry, RouteTable};

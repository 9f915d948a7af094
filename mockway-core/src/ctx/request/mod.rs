mod descriptor;
mod error;
mod request_id;

pub use descriptor::*;
pub use error::*;
pub use request_id::*;

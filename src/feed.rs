
mod dispatcher;
mod transport;

pub use dispatcher::*;
pub use transport::*;

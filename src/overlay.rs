
pub mod colours;

mod legend;
mod mapper;
mod renderer;

pub use legend::*;
pub use mapper::*;
pub use renderer::*;

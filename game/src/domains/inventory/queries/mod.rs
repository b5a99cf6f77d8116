pub use functions::*;
pub use search::*;

mod functions;
mod search;

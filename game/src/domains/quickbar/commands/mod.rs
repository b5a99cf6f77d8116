pub use clear_slot::*;
pub use set_active_index::*;
pub use set_slot::*;

mod clear_slot;
mod set_active_index;
mod set_slot;

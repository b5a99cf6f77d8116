pub use acquire_item::*;
pub use add_to_slot::*;
pub use attach_item::*;
pub use consume_items::*;
pub use cycle_slot::*;
pub use detach_item::*;
pub use discard_item::*;
pub use equip_item::*;
pub use move_item::*;
pub use remove_from_slot::*;
pub use set_active_slot::*;

mod acquire_item;
mod add_to_slot;
mod attach_item;
mod consume_items;
mod cycle_slot;
mod detach_item;
mod discard_item;
mod equip_item;
mod move_item;
mod remove_from_slot;
mod set_active_slot;

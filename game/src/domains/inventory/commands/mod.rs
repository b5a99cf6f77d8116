pub use attach_item::*;
pub use change_stat::*;
pub use consume_items::*;
pub use create_item::*;
pub use detach_item::*;
pub use remove_item::*;
pub use transfer_item::*;

mod attach_item;
mod change_stat;
mod consume_items;
mod create_item;
mod detach_item;
mod remove_item;
mod transfer_item;

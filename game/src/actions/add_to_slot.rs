use crate::api::{ActionError, Event};
use crate::inventory::ItemId;
use crate::model::Fighter;
use crate::{emit, Game};

impl Game {
    /// Binds a backpack item to an empty quick bar slot. The item stays in
    /// its container; the slot only references it.
    pub(crate) fn add_to_slot(
        &mut self,
        fighter: Fighter,
        index: usize,
        item: ItemId,
    ) -> Result<Vec<Event>, ActionError> {
        self.inventory
            .get_container(fighter.backpack)?
            .get_item(item)?;
        let change = self.quickbar.set_slot(fighter.quickbar, index, item)?;
        emit![change()]
    }
}

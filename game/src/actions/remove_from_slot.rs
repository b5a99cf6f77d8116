use crate::api::{ActionError, Event};
use crate::inventory::ItemId;
use crate::model::Fighter;
use crate::quickbar::QuickbarError;
use crate::{occur, Game};

impl Game {
    /// Clears a quick bar slot and returns the item that was bound to it.
    /// Clearing the active slot forces a full unequip before the slot is
    /// emptied and drops the selection.
    pub fn remove_from_slot(
        &mut self,
        fighter: Fighter,
        index: usize,
    ) -> Result<(Option<ItemId>, Vec<Event>), ActionError> {
        let quickbar = self.quickbar.get_quickbar(fighter.quickbar)?;
        let mut events = vec![];
        if quickbar.active == index as isize {
            events.extend(self.unequip_slot_item(fighter)?);
            let change = self.quickbar.set_active_index(fighter.quickbar, -1)?;
            events.extend(occur![change()]);
        }
        match self.quickbar.clear_slot(fighter.quickbar, index) {
            Ok((item, clear)) => {
                events.extend(occur![clear()]);
                Ok((Some(item), events))
            }
            Err(QuickbarError::SlotEmpty { .. }) => Ok((None, events)),
            Err(error) => Err(error.into()),
        }
    }
}

use crate::api::{ActionError, Event};
use crate::model::Fighter;
use crate::quickbar::QuickbarError;
use crate::{occur, Game};

impl Game {
    /// Selecting the already active slot changes nothing. Otherwise the
    /// current selection is unequipped to completion before the new slot
    /// is equipped.
    pub(crate) fn set_active_slot(
        &mut self,
        fighter: Fighter,
        index: isize,
    ) -> Result<Vec<Event>, ActionError> {
        let quickbar = self.quickbar.get_quickbar(fighter.quickbar)?;
        if quickbar.active == index {
            return Ok(vec![]);
        }
        if index < 0 || index >= quickbar.slots.len() as isize {
            return Err(QuickbarError::SlotNotFound {
                id: fighter.quickbar,
                index,
            }
            .into());
        }
        let mut events = self.unequip_slot_item(fighter)?;
        let change = self.quickbar.set_active_index(fighter.quickbar, index)?;
        events.extend(occur![change()]);
        events.extend(self.equip_slot_item(fighter)?);
        Ok(events)
    }
}

use crate::api::{ActionError, Event};
use crate::inventory::{ContainerId, InventoryError, ItemId};
use crate::{emit, Game};

impl Game {
    /// Drops an item out of a ledger entirely, cutting any attachment
    /// relations it still holds. Removing an instance that is not there
    /// is a no-op, not an error.
    pub fn discard_item(
        &mut self,
        container: ContainerId,
        item: ItemId,
    ) -> Result<Vec<Event>, ActionError> {
        let remove = match self.inventory.remove_item(container, item) {
            Ok(remove) => remove,
            Err(InventoryError::ItemNotFound { .. }) => return Ok(vec![]),
            Err(error) => return Err(error.into()),
        };
        emit![remove()]
    }
}

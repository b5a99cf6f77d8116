use crate::api::{ActionError, Event};
use crate::equipment::EquipmentError;
use crate::inventory::{ContainerId, FunctionsQuery, InventoryError, ItemId};
use crate::model::Fighter;
use crate::{occur, Game};

impl Game {
    /// Moves an item between two containers. An attachment leaving its
    /// host's container is detached first, and a currently equipped host
    /// loses the attachment's active effects in the same tick.
    pub(crate) fn move_item(
        &mut self,
        _fighter: Fighter,
        item: ItemId,
        source: ContainerId,
        destination: ContainerId,
    ) -> Result<Vec<Event>, ActionError> {
        let moved = self.inventory.get_container(source)?.get_item(item)?;
        let attachable = moved.kind.functions.as_attachable().is_ok();
        let parent = moved.parent;
        if destination == source {
            return Err(InventoryError::ItemAlreadyInContainer {
                container: destination,
                item,
            }
            .into());
        }
        let target = self.inventory.get_container(destination)?;
        if target.items.len() + 1 > target.kind.capacity {
            return Err(InventoryError::ContainerIsFull { id: destination }.into());
        }
        let mut events = vec![];
        if attachable {
            if let Some(host) = parent {
                events.extend(self.release_attachment(host, item)?);
            }
        }
        let transfer = self.inventory.transfer_item(source, item, destination)?;
        events.extend(occur![transfer()]);
        Ok(events)
    }

    /// Cuts one attachment link and, when the host is currently equipped,
    /// reverses the attachment's activation on the live instance.
    pub(crate) fn release_attachment(
        &mut self,
        host: ItemId,
        attachment: ItemId,
    ) -> Result<Vec<Event>, ActionError> {
        let mut events = vec![];
        if let Some(instance) = self.equipment.get_equipment_by_item(host) {
            let equipment = instance.id;
            match self.equipment.deactivate_attachment(equipment, attachment) {
                Ok(deactivate) => events.extend(occur![deactivate()]),
                // never activated, nothing to reverse
                Err(EquipmentError::AttachmentNotActive { .. }) => {}
                Err(error) => return Err(error.into()),
            }
        }
        let detach = self.inventory.detach_item(host, attachment)?;
        events.extend(occur![detach()]);
        Ok(events)
    }
}

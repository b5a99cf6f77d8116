use crate::api::{ActionError, Event};
use crate::equipment::AttachmentKey;
use crate::inventory::{ContainerId, FunctionsQuery, InventoryError, ItemId};
use crate::model::Fighter;
use crate::{occur, Game};

impl Game {
    /// Attaches an item from any container to a host in the fighter's
    /// backpack. The attachment is pulled into the backpack first when it
    /// lives elsewhere. All checks run before the first mutation so a
    /// rejected request leaves every ledger untouched.
    pub(crate) fn attach_item(
        &mut self,
        fighter: Fighter,
        host: ItemId,
        attachment: ItemId,
        source: ContainerId,
    ) -> Result<Vec<Event>, ActionError> {
        if host == attachment {
            return Err(InventoryError::AttachmentCycle { host, attachment }.into());
        }
        let host_item = self.inventory.get_container(fighter.backpack)?.get_item(host)?;
        host_item
            .kind
            .functions
            .as_equippable()
            .map_err(|_| InventoryError::ItemNotEquippable { id: host })?;
        if host_item.attachments.contains(&attachment) {
            return Err(InventoryError::AlreadyAttached { host, attachment }.into());
        }
        let slots = self.known.stats.find("attachment-slots")?.id;
        let capacity = host_item.stat_count(slots);
        if host_item.attachments.len() as i32 >= capacity {
            return Err(InventoryError::AttachmentSlotsExceeded { host, capacity }.into());
        }
        let mut ancestor = host_item.parent;
        while let Some(above) = ancestor {
            if above == attachment {
                return Err(InventoryError::AttachmentCycle { host, attachment }.into());
            }
            ancestor = self.inventory.find_item(above)?.parent;
        }
        let attachment_item = self.inventory.get_container(source)?.get_item(attachment)?;
        attachment_item
            .kind
            .functions
            .as_attachable()
            .map_err(|_| InventoryError::ItemNotAttachable { id: attachment })?;

        let mut events = vec![];
        if source != fighter.backpack {
            events.extend(self.move_item(fighter, attachment, source, fighter.backpack)?);
        }
        let previous = self.inventory.find_item(attachment)?.parent;
        if let Some(previous) = previous {
            events.extend(self.release_attachment(previous, attachment)?);
        }
        let attach = self.inventory.attach_item(host, attachment, slots)?;
        events.extend(occur![attach()]);
        if let Some(instance) = self.equipment.get_equipment_by_item(host) {
            let equipment = instance.id;
            let key = self
                .inventory
                .find_item(attachment)?
                .kind
                .functions
                .as_attachable()?;
            let kind = self.known.attachments.get(AttachmentKey(key))?;
            let activate = self.equipment.activate_attachment(equipment, attachment, &kind)?;
            events.extend(occur![activate()]);
        }
        Ok(events)
    }
}

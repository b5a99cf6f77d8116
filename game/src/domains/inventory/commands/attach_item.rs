use crate::inventory::Inventory::AttachmentChanged;
use crate::inventory::{FunctionsQuery, Inventory, InventoryDomain, InventoryError, ItemId, StatKey};

impl InventoryDomain {
    /// Installs a parent/child relation between two items. The host must be
    /// equippable, the attachment attachable, and the host must have a free
    /// attachment slot. An attachment currently held by another host is
    /// released from it first, within the same event sequence.
    pub fn attach_item<'operation>(
        &'operation mut self,
        host: ItemId,
        attachment: ItemId,
        slots: StatKey,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        if host == attachment {
            return Err(InventoryError::AttachmentCycle { host, attachment });
        }
        let host_item = self.find_item(host)?;
        host_item
            .kind
            .functions
            .as_equippable()
            .map_err(|_| InventoryError::ItemNotEquippable { id: host })?;
        if host_item.attachments.contains(&attachment) {
            return Err(InventoryError::AlreadyAttached { host, attachment });
        }
        let capacity = host_item.stat_count(slots);
        if host_item.attachments.len() as i32 >= capacity {
            return Err(InventoryError::AttachmentSlotsExceeded { host, capacity });
        }
        let mut ancestor = host_item.parent;
        while let Some(above) = ancestor {
            if above == attachment {
                return Err(InventoryError::AttachmentCycle { host, attachment });
            }
            ancestor = self.find_item(above)?.parent;
        }
        let attachment_item = self.find_item(attachment)?;
        attachment_item
            .kind
            .functions
            .as_attachable()
            .map_err(|_| InventoryError::ItemNotAttachable { id: attachment })?;
        let previous = attachment_item.parent;
        let operation = move || {
            let mut events = vec![];
            if let Some(previous) = previous {
                let old_host = self.mut_item(previous).unwrap();
                old_host.attachments.retain(|id| *id != attachment);
                events.push(AttachmentChanged {
                    host: previous,
                    attachment,
                    delta: -1,
                });
            }
            let item = self.mut_item(attachment).unwrap();
            item.parent = Some(host);
            let host_item = self.mut_item(host).unwrap();
            host_item.attachments.push(attachment);
            events.push(AttachmentChanged {
                host,
                attachment,
                delta: 1,
            });
            events
        };
        Ok(operation)
    }
}

use crate::inventory::Inventory::AttachmentChanged;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemId};

impl InventoryDomain {
    pub fn detach_item<'operation>(
        &'operation mut self,
        host: ItemId,
        attachment: ItemId,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let host_item = self.find_item(host)?;
        if !host_item.attachments.contains(&attachment) {
            return Err(InventoryError::NotAttached { host, attachment });
        }
        self.find_item(attachment)?;
        let operation = move || {
            let host_item = self.mut_item(host).unwrap();
            host_item.attachments.retain(|id| *id != attachment);
            let item = self.mut_item(attachment).unwrap();
            item.parent = None;
            vec![AttachmentChanged {
                host,
                attachment,
                delta: -1,
            }]
        };
        Ok(operation)
    }
}

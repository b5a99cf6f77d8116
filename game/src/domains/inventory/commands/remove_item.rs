use crate::inventory::Inventory::{AttachmentChanged, ItemRemoved};
use crate::inventory::{ContainerId, Inventory, InventoryDomain, InventoryError, Item, ItemId};

impl InventoryDomain {
    pub fn remove_item<'operation>(
        &'operation mut self,
        container: ContainerId,
        item: ItemId,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let source = self.get_container(container)?;
        let index = source.index_item(item)?;
        let operation = move || {
            let source = self.get_mut_container(container).unwrap();
            let item = source.items.remove(index);
            let mut events = vec![ItemRemoved {
                item: item.id,
                container,
            }];
            events.extend(self.sever_links(&item));
            events
        };
        Ok(operation)
    }

    /// Cuts every attachment relation of a removed item so that no
    /// one-sided link survives it.
    pub(crate) fn sever_links(&mut self, item: &Item) -> Vec<Inventory> {
        let mut events = vec![];
        if let Some(host) = item.parent {
            if let Ok(host_item) = self.mut_item(host) {
                host_item.attachments.retain(|id| *id != item.id);
                events.push(AttachmentChanged {
                    host,
                    attachment: item.id,
                    delta: -1,
                });
            }
        }
        for attachment in &item.attachments {
            if let Ok(child) = self.mut_item(*attachment) {
                child.parent = None;
                events.push(AttachmentChanged {
                    host: item.id,
                    attachment: *attachment,
                    delta: -1,
                });
            }
        }
        events
    }
}

use crate::inventory::Inventory::{ItemAdded, ItemRemoved};
use crate::inventory::{ContainerId, Inventory, InventoryDomain, InventoryError, ItemId};

impl InventoryDomain {
    /// Moves one item between two containers as a single remove/add
    /// event sequence. The caller is responsible for cutting attachment
    /// relations that must not survive the move.
    pub fn transfer_item<'operation>(
        &'operation mut self,
        source: ContainerId,
        item: ItemId,
        destination: ContainerId,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let source_container = self.get_container(source)?;
        let index = source_container.index_item(item)?;
        if destination == source {
            return Err(InventoryError::ItemAlreadyInContainer {
                container: destination,
                item,
            });
        }
        let destination_container = self.get_container(destination)?;
        if destination_container.items.len() + 1 > destination_container.kind.capacity {
            return Err(InventoryError::ContainerIsFull { id: destination });
        }
        let operation = move || {
            let container = self.get_mut_container(source).unwrap();
            let mut item = container.items.remove(index);
            let mut events = vec![ItemRemoved {
                item: item.id,
                container: source,
            }];
            item.container = destination;
            events.push(ItemAdded {
                id: item.id,
                kind: item.kind.id,
                container: item.container,
                quantity: item.quantity,
            });
            let destination = self.get_mut_container(destination).unwrap();
            destination.items.push(item);
            events
        };
        Ok(operation)
    }
}

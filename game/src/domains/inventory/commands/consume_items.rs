use crate::inventory::Inventory::ItemRemoved;
use crate::inventory::{ContainerId, Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    /// Destroys `count` items of one kind from a container. Availability
    /// is checked before anything is touched: when the container cannot
    /// satisfy the whole request the command fails with no side effects.
    pub fn consume_items<'operation>(
        &'operation mut self,
        container: ContainerId,
        kind: ItemKey,
        count: u8,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let source = self.get_container(container)?;
        let matched: Vec<usize> = source
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind.id == kind)
            .map(|(index, _)| index)
            .take(count as usize)
            .collect();
        if matched.len() < count as usize {
            return Err(InventoryError::NotEnoughItems {
                container,
                kind,
                requested: count,
                available: matched.len() as u8,
            });
        }
        let operation = move || {
            let mut events = vec![];
            for index in matched.into_iter().rev() {
                let source = self.get_mut_container(container).unwrap();
                let item = source.items.remove(index);
                events.push(ItemRemoved {
                    item: item.id,
                    container,
                });
                events.extend(self.sever_links(&item));
            }
            events
        };
        Ok(operation)
    }
}

use std::collections::HashMap;

use crate::collections::Shared;
use crate::inventory::Inventory::ItemAdded;
use crate::inventory::{
    ContainerId, Function, Inventory, InventoryDomain, InventoryError, Item, ItemId, ItemKind,
    StatKey,
};

impl InventoryDomain {
    pub fn create_item<'operation>(
        &'operation mut self,
        kind: &Shared<ItemKind>,
        container: ContainerId,
        quantity: u8,
    ) -> Result<(ItemId, impl FnOnce() -> Vec<Inventory> + 'operation), InventoryError> {
        let target = self.get_container(container)?;
        if target.items.len() + 1 > target.kind.capacity {
            return Err(InventoryError::ContainerIsFull { id: container });
        }
        let id = self.items_id.introduce().one(ItemId);
        let limit = if kind.stackable { kind.max_quantity } else { 1 };
        if quantity == 0 || quantity > limit {
            return Err(InventoryError::ItemQuantityOverflow { id });
        }
        let mut stats = HashMap::new();
        for function in &kind.functions {
            if let Function::Stats(seeds) = function {
                for (stat, count) in seeds {
                    stats.insert(StatKey(*stat), *count);
                }
            }
        }
        let item = Item {
            id,
            kind: kind.clone(),
            container,
            quantity,
            stats,
            parent: None,
            attachments: vec![],
        };
        let operation = move || {
            let events = vec![ItemAdded {
                id: item.id,
                kind: item.kind.id,
                container,
                quantity: item.quantity,
            }];
            self.items_id.register(id.0);
            let container = self.get_mut_container(container).unwrap();
            container.items.push(item);
            events
        };
        Ok((id, operation))
    }
}

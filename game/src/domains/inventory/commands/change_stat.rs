use crate::inventory::Inventory::ItemStatChanged;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemId, StatKey};

impl InventoryDomain {
    pub fn add_stat<'operation>(
        &'operation mut self,
        item: ItemId,
        stat: StatKey,
        count: i32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        self.find_item(item)?;
        let operation = move || {
            let target = self.mut_item(item).unwrap();
            let value = target.stats.entry(stat).or_insert(0);
            *value += count;
            vec![ItemStatChanged {
                id: item,
                stat,
                count: *value,
            }]
        };
        Ok(operation)
    }

    /// Decreases a stat stack; the stack vanishes when it reaches zero.
    pub fn remove_stat<'operation>(
        &'operation mut self,
        item: ItemId,
        stat: StatKey,
        count: i32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        self.find_item(item)?;
        let operation = move || {
            let target = self.mut_item(item).unwrap();
            let value = target.stat_count(stat) - count;
            if value > 0 {
                target.stats.insert(stat, value);
            } else {
                target.stats.remove(&stat);
            }
            vec![ItemStatChanged {
                id: item,
                stat,
                count: value.max(0),
            }]
        };
        Ok(operation)
    }
}

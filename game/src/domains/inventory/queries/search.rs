use crate::inventory::{ContainerId, InventoryDomain, Item, ItemKey};

impl InventoryDomain {
    pub fn find_first_item(&self, container: ContainerId, kind: ItemKey) -> Option<&Item> {
        self.containers
            .get(&container)?
            .items
            .iter()
            .find(|item| item.kind.id == kind)
    }

    pub fn count_items(&self, container: ContainerId, kind: ItemKey) -> usize {
        match self.containers.get(&container) {
            Some(container) => container
                .items
                .iter()
                .filter(|item| item.kind.id == kind)
                .count(),
            None => 0,
        }
    }
}

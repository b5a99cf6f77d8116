use std::collections::HashMap;

use crate::collections::{Sequence, Shared};
use crate::inventory::InventoryError::{ContainerNotFound, ItemNotExists, ItemNotFound};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerKey(pub usize);

pub struct ContainerKind {
    pub id: ContainerKey,
    pub name: String,
    pub capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct ContainerId(pub usize);

pub struct Container {
    pub id: ContainerId,
    pub kind: Shared<ContainerKind>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct StatKey(pub usize);

pub struct StatKind {
    pub id: StatKey,
    pub name: String,
}

/// Capability set of an item kind. Keys reference equipment and attachment
/// kinds of the equipment domain, stat seeds reference stat kinds.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub enum Function {
    Equippable(usize),
    Attachable(usize),
    Attachments(Vec<usize>),
    Stats(Vec<(usize, i32)>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct ItemKey(pub usize);

pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    pub stackable: bool,
    pub max_quantity: u8,
    pub functions: Vec<Function>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct ItemId(pub usize);

pub struct Item {
    pub id: ItemId,
    pub kind: Shared<ItemKind>,
    pub container: ContainerId,
    pub quantity: u8,
    pub stats: HashMap<StatKey, i32>,
    pub parent: Option<ItemId>,
    pub attachments: Vec<ItemId>,
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub struct ItemData {
    pub id: ItemId,
    pub kind: ItemKey,
    pub container: ContainerId,
    pub quantity: u8,
    pub parent: Option<ItemId>,
    pub attachments: Vec<ItemId>,
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Inventory {
    ItemAdded {
        id: ItemId,
        kind: ItemKey,
        container: ContainerId,
        quantity: u8,
    },
    ItemRemoved {
        item: ItemId,
        container: ContainerId,
    },
    ItemStatChanged {
        id: ItemId,
        stat: StatKey,
        count: i32,
    },
    AttachmentChanged {
        host: ItemId,
        attachment: ItemId,
        delta: i8,
    },
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum InventoryError {
    ContainerNotFound {
        id: ContainerId,
    },
    ContainerIsFull {
        id: ContainerId,
    },
    ItemNotFound {
        container: ContainerId,
        item: ItemId,
    },
    ItemNotExists {
        item: ItemId,
    },
    ItemAlreadyInContainer {
        container: ContainerId,
        item: ItemId,
    },
    ItemFunctionNotFound,
    ItemQuantityOverflow {
        id: ItemId,
    },
    NotEnoughItems {
        container: ContainerId,
        kind: ItemKey,
        requested: u8,
        available: u8,
    },
    ItemNotEquippable {
        id: ItemId,
    },
    ItemNotAttachable {
        id: ItemId,
    },
    AttachmentSlotsExceeded {
        host: ItemId,
        capacity: i32,
    },
    AlreadyAttached {
        host: ItemId,
        attachment: ItemId,
    },
    NotAttached {
        host: ItemId,
        attachment: ItemId,
    },
    AttachmentCycle {
        host: ItemId,
        attachment: ItemId,
    },
}

#[derive(Default)]
pub struct InventoryDomain {
    pub containers: HashMap<ContainerId, Container>,
    pub containers_id: Sequence,
    pub items_id: Sequence,
}

impl InventoryDomain {
    pub fn load_containers(&mut self, containers: Vec<Container>, sequence: usize) {
        self.containers_id.set(sequence);
        for container in containers {
            self.containers.insert(container.id, container);
        }
    }

    pub fn load_items(&mut self, items: Vec<Item>, sequence: usize) {
        self.items_id.set(sequence);
        for item in items {
            let container = self.containers.get_mut(&item.container).unwrap();
            container.items.push(item);
        }
    }

    pub fn get_container(&self, id: ContainerId) -> Result<&Container, InventoryError> {
        self.containers.get(&id).ok_or(ContainerNotFound { id })
    }

    pub fn get_mut_container(&mut self, id: ContainerId) -> Result<&mut Container, InventoryError> {
        self.containers.get_mut(&id).ok_or(ContainerNotFound { id })
    }

    pub fn find_item(&self, id: ItemId) -> Result<&Item, InventoryError> {
        self.containers
            .values()
            .flat_map(|container| container.items.iter())
            .find(|item| item.id == id)
            .ok_or(ItemNotExists { item: id })
    }

    pub(crate) fn mut_item(&mut self, id: ItemId) -> Result<&mut Item, InventoryError> {
        self.containers
            .values_mut()
            .flat_map(|container| container.items.iter_mut())
            .find(|item| item.id == id)
            .ok_or(ItemNotExists { item: id })
    }

    pub fn get_attachments(&self, host: ItemId) -> Result<&Vec<ItemId>, InventoryError> {
        Ok(&self.find_item(host)?.attachments)
    }
}

impl Container {
    pub fn get_item(&self, id: ItemId) -> Result<&Item, InventoryError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(ItemNotFound {
                container: self.id,
                item: id,
            })
    }

    pub fn index_item(&self, id: ItemId) -> Result<usize, InventoryError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemNotFound {
                container: self.id,
                item: id,
            })
    }
}

impl Item {
    pub fn stat_count(&self, stat: StatKey) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    pub fn has_stat(&self, stat: StatKey) -> bool {
        self.stat_count(stat) > 0
    }

    pub fn as_data(&self) -> ItemData {
        ItemData {
            id: self.id,
            kind: self.kind.id,
            container: self.container,
            quantity: self.quantity,
            parent: self.parent,
            attachments: self.attachments.clone(),
        }
    }
}

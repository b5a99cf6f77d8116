use std::collections::HashMap;

use crate::api::Event;
use crate::equipment::{EffectId, Equipment, EquipmentId, PropId};
use crate::inventory::{ContainerId, Inventory, ItemData, ItemId, ItemKey, StatKey};
use crate::model::{Fighter, Stash, Universe};
use crate::quickbar::{QuickbarChange, QuickbarId};

pub struct ItemMirror {
    pub kind: ItemKey,
    pub container: ContainerId,
    pub quantity: u8,
    pub stats: HashMap<StatKey, i32>,
    pub parent: Option<ItemId>,
    pub attachments: Vec<ItemId>,
}

pub struct EquipmentMirror {
    pub item: ItemId,
    pub props: Vec<PropId>,
    pub effects: Vec<EffectId>,
}

#[derive(Default)]
pub struct QuickbarMirror {
    pub slots: Vec<Option<ItemId>>,
    pub active: isize,
}

/// Non-authoritative mirror of the observable state. It replays events
/// the authority emitted and exposes nothing that could originate a
/// change, so a remote copy can never become a source of truth.
#[derive(Default)]
pub struct Replica {
    pub fighters: Vec<Fighter>,
    pub stashes: Vec<Stash>,
    pub items: HashMap<ItemId, ItemMirror>,
    pub equipments: HashMap<EquipmentId, EquipmentMirror>,
    pub quickbars: HashMap<QuickbarId, QuickbarMirror>,
    // items removed earlier in the batch, waiting for the matching add
    limbo: HashMap<ItemId, ItemMirror>,
}

impl Replica {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn perceive(&mut self, events: Vec<Event>) {
        for event in events {
            match event {
                Event::Universe(events) => {
                    for event in events {
                        self.perceive_universe(event);
                    }
                }
                Event::Inventory(events) => {
                    for event in events {
                        self.perceive_inventory(event);
                    }
                }
                Event::Equipment(events) => {
                    for event in events {
                        self.perceive_equipment(event);
                    }
                }
                Event::Quickbar(events) => {
                    for event in events {
                        self.perceive_quickbar(event);
                    }
                }
            }
        }
        // whatever was removed and never re-added is gone for good
        self.limbo.clear();
    }

    fn perceive_universe(&mut self, event: Universe) {
        match event {
            Universe::FighterAppeared { fighter, .. } => {
                if !self.fighters.iter().any(|known| known.id == fighter.id) {
                    self.fighters.push(fighter);
                }
            }
            Universe::StashAppeared { stash } => {
                if !self.stashes.iter().any(|known| known.id == stash.id) {
                    self.stashes.push(stash);
                }
            }
            Universe::ItemsAppeared { items } => {
                for item in items {
                    self.insert_item(item);
                }
            }
        }
    }

    fn insert_item(&mut self, data: ItemData) {
        self.items.insert(
            data.id,
            ItemMirror {
                kind: data.kind,
                container: data.container,
                quantity: data.quantity,
                stats: HashMap::new(),
                parent: data.parent,
                attachments: data.attachments,
            },
        );
    }

    fn perceive_inventory(&mut self, event: Inventory) {
        match event {
            Inventory::ItemAdded {
                id,
                kind,
                container,
                quantity,
            } => {
                // a remove/add pair within one batch is a move, links stay
                let mut mirror = self.limbo.remove(&id).unwrap_or(ItemMirror {
                    kind,
                    container,
                    quantity,
                    stats: HashMap::new(),
                    parent: None,
                    attachments: vec![],
                });
                mirror.container = container;
                mirror.quantity = quantity;
                self.items.insert(id, mirror);
            }
            Inventory::ItemRemoved { item, .. } => {
                if let Some(mirror) = self.items.remove(&item) {
                    self.limbo.insert(item, mirror);
                }
            }
            Inventory::ItemStatChanged { id, stat, count } => {
                if let Some(mirror) = self.items.get_mut(&id) {
                    if count > 0 {
                        mirror.stats.insert(stat, count);
                    } else {
                        mirror.stats.remove(&stat);
                    }
                }
            }
            Inventory::AttachmentChanged {
                host,
                attachment,
                delta,
            } => {
                if delta > 0 {
                    if let Some(mirror) = self.items.get_mut(&host) {
                        mirror.attachments.push(attachment);
                    }
                    if let Some(mirror) = self.items.get_mut(&attachment) {
                        mirror.parent = Some(host);
                    }
                } else {
                    if let Some(mirror) = self.items.get_mut(&host) {
                        mirror.attachments.retain(|id| *id != attachment);
                    }
                    if let Some(mirror) = self.items.get_mut(&attachment) {
                        mirror.parent = None;
                    }
                }
            }
        }
    }

    fn perceive_equipment(&mut self, event: Equipment) {
        match event {
            Equipment::EquipmentCreated { id, item, .. } => {
                self.equipments.insert(
                    id,
                    EquipmentMirror {
                        item,
                        props: vec![],
                        effects: vec![],
                    },
                );
            }
            Equipment::EquipmentReleased { id } => {
                self.equipments.remove(&id);
            }
            Equipment::PropSpawned { id, equipment, .. } => {
                if let Some(mirror) = self.equipments.get_mut(&equipment) {
                    mirror.props.push(id);
                }
            }
            Equipment::PropDestroyed { id, equipment } => {
                if let Some(mirror) = self.equipments.get_mut(&equipment) {
                    mirror.props.retain(|prop| *prop != id);
                }
            }
            Equipment::EffectApplied { id, equipment, .. } => {
                if let Some(mirror) = self.equipments.get_mut(&equipment) {
                    mirror.effects.push(id);
                }
            }
            Equipment::EffectRemoved { id, equipment } => {
                if let Some(mirror) = self.equipments.get_mut(&equipment) {
                    mirror.effects.retain(|effect| *effect != id);
                }
            }
        }
    }

    fn perceive_quickbar(&mut self, event: QuickbarChange) {
        match event {
            QuickbarChange::SlotsChanged { id, slots } => {
                let mirror = self.quickbars.entry(id).or_default();
                mirror.slots = slots;
            }
            QuickbarChange::ActiveIndexChanged { id, index } => {
                let mirror = self.quickbars.entry(id).or_default();
                mirror.active = index;
            }
        }
    }

    pub fn items_in(&self, container: ContainerId) -> Vec<ItemId> {
        let mut items: Vec<ItemId> = self
            .items
            .iter()
            .filter(|(_, mirror)| mirror.container == container)
            .map(|(id, _)| *id)
            .collect();
        items.sort_by_key(|item| item.0);
        items
    }

    pub fn attachments_of(&self, host: ItemId) -> Vec<ItemId> {
        match self.items.get(&host) {
            Some(mirror) => mirror.attachments.clone(),
            None => vec![],
        }
    }
}

use std::collections::HashMap;

use crate::collections::{Sequence, Shared};
use crate::equipment::EquipmentId;
use crate::inventory::ItemId;
use crate::quickbar::QuickbarError::QuickbarNotFound;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuickbarKey(pub usize);

pub struct QuickbarKind {
    pub id: QuickbarKey,
    pub name: String,
    pub slots: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct QuickbarId(pub usize);

/// A fixed set of item slots with one active selection. The active index
/// is -1 while nothing is selected.
pub struct Quickbar {
    pub id: QuickbarId,
    pub kind: Shared<QuickbarKind>,
    pub slots: Vec<Option<ItemId>>,
    pub active: isize,
    pub equipment: Option<EquipmentId>,
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum QuickbarChange {
    SlotsChanged {
        id: QuickbarId,
        slots: Vec<Option<ItemId>>,
    },
    ActiveIndexChanged {
        id: QuickbarId,
        index: isize,
    },
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum QuickbarError {
    QuickbarNotFound {
        id: QuickbarId,
    },
    SlotNotFound {
        id: QuickbarId,
        index: isize,
    },
    SlotOccupied {
        id: QuickbarId,
        index: usize,
    },
    SlotEmpty {
        id: QuickbarId,
        index: usize,
    },
}

#[derive(Default)]
pub struct QuickbarDomain {
    pub quickbars: HashMap<QuickbarId, Quickbar>,
    pub quickbars_id: Sequence,
}

impl QuickbarDomain {
    pub fn load_quickbars(&mut self, quickbars: Vec<Quickbar>, sequence: usize) {
        self.quickbars_id.set(sequence);
        for quickbar in quickbars {
            self.quickbars.insert(quickbar.id, quickbar);
        }
    }

    pub fn get_quickbar(&self, id: QuickbarId) -> Result<&Quickbar, QuickbarError> {
        self.quickbars.get(&id).ok_or(QuickbarNotFound { id })
    }

    /// Bookkeeping of the live equipment handle; intentionally silent,
    /// the handle itself is not part of the observable contract.
    pub fn assign_equipment(
        &mut self,
        id: QuickbarId,
        equipment: Option<EquipmentId>,
    ) -> Result<(), QuickbarError> {
        let quickbar = self.quickbars.get_mut(&id).ok_or(QuickbarNotFound { id })?;
        quickbar.equipment = equipment;
        Ok(())
    }
}

impl Quickbar {
    pub fn active_item(&self) -> Option<ItemId> {
        if self.active < 0 {
            return None;
        }
        self.slots.get(self.active as usize).copied().flatten()
    }

    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Next populated slot in cycling order, skipping empty slots and
    /// wrapping around. Returns None when every slot is empty.
    pub fn next_populated(&self, forward: bool) -> Option<isize> {
        let len = self.slots.len() as isize;
        if len == 0 {
            return None;
        }
        let origin = if self.active < 0 {
            if forward {
                len - 1
            } else {
                0
            }
        } else {
            self.active
        };
        let mut cursor = origin;
        for _ in 0..len {
            cursor = if forward {
                (cursor + 1) % len
            } else {
                (cursor - 1 + len) % len
            };
            if self.slots[cursor as usize].is_some() {
                return Some(cursor);
            }
        }
        None
    }
}

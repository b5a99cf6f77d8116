use std::collections::HashMap;

use crate::collections::{Sequence, Shared};
use crate::equipment::EquipmentError::EquipmentNotFound;
use crate::inventory::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct EquipmentKey(pub usize);

pub struct EquipmentKind {
    pub id: EquipmentKey,
    pub name: String,
    pub props: Vec<PropSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentKey(pub usize);

/// What an attachment contributes while its host item is equipped.
pub struct AttachmentKind {
    pub id: AttachmentKey,
    pub name: String,
    pub effects: Vec<Shared<EffectKind>>,
    pub props: Vec<PropSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct PropKey(pub usize);

pub struct PropKind {
    pub id: PropKey,
    pub name: String,
}

/// A visual proxy to seat on a socket of the wearer or of the primary
/// equipment proxy.
pub struct PropSpec {
    pub prop: Shared<PropKind>,
    pub socket: String,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub enum Attribute {
    Damage,
    DamageMultiplier,
    Heal,
    Speed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct EffectKey(pub usize);

pub struct EffectKind {
    pub id: EffectKey,
    pub name: String,
    pub attribute: Attribute,
    pub magnitude: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct EquipmentId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct PropId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct EffectId(pub usize);

pub struct Prop {
    pub id: PropId,
    pub kind: Shared<PropKind>,
    pub socket: String,
}

pub struct ActiveEffect {
    pub id: EffectId,
    pub kind: Shared<EffectKind>,
    pub source: ItemId,
}

/// Per-attachment activation record. Deactivation keys off these records,
/// not off the attachment list of the bound item, which may already have
/// changed by the time the reaction runs.
pub struct Activation {
    pub item: ItemId,
    pub effects: Vec<ActiveEffect>,
    pub props: Vec<Prop>,
}

/// Exists exactly while its bound item is the active quick bar selection.
pub struct EquipmentInstance {
    pub id: EquipmentId,
    pub kind: Shared<EquipmentKind>,
    pub item: ItemId,
    pub props: Vec<Prop>,
    pub activations: Vec<Activation>,
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Equipment {
    EquipmentCreated {
        id: EquipmentId,
        kind: EquipmentKey,
        item: ItemId,
    },
    EquipmentReleased {
        id: EquipmentId,
    },
    PropSpawned {
        id: PropId,
        kind: PropKey,
        equipment: EquipmentId,
        socket: String,
        attachment: Option<ItemId>,
    },
    PropDestroyed {
        id: PropId,
        equipment: EquipmentId,
    },
    EffectApplied {
        id: EffectId,
        kind: EffectKey,
        equipment: EquipmentId,
        source: ItemId,
    },
    EffectRemoved {
        id: EffectId,
        equipment: EquipmentId,
    },
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum EquipmentError {
    EquipmentNotFound {
        id: EquipmentId,
    },
    ItemAlreadyEquipped {
        item: ItemId,
    },
    AttachmentAlreadyActive {
        equipment: EquipmentId,
        item: ItemId,
    },
    AttachmentNotActive {
        equipment: EquipmentId,
        item: ItemId,
    },
}

#[derive(Default)]
pub struct EquipmentDomain {
    pub equipments: HashMap<EquipmentId, EquipmentInstance>,
    pub equipments_id: Sequence,
    pub props_id: Sequence,
    pub effects_id: Sequence,
}

impl EquipmentDomain {
    pub fn get_equipment(&self, id: EquipmentId) -> Result<&EquipmentInstance, EquipmentError> {
        self.equipments.get(&id).ok_or(EquipmentNotFound { id })
    }

    pub fn get_equipment_by_item(&self, item: ItemId) -> Option<&EquipmentInstance> {
        self.equipments
            .values()
            .find(|equipment| equipment.item == item)
    }
}

impl EquipmentInstance {
    pub fn is_active(&self, attachment: ItemId) -> bool {
        self.activations
            .iter()
            .any(|activation| activation.item == attachment)
    }
}

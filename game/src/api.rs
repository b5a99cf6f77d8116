use crate::collections::DictionaryError;
use crate::equipment::{Equipment, EquipmentError};
use crate::inventory::{ContainerId, Inventory, InventoryError, ItemId, ItemKey};
use crate::model::Universe;
use crate::quickbar::{QuickbarChange, QuickbarError};

pub const API_VERSION: &str = "0.1";

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum PlayerRequest {
    Heartbeat,
    Login {
        version: String,
        player: String,
        password: Option<String>,
    },
    Perform {
        action_id: usize,
        action: Action,
    },
}

impl PlayerRequest {
    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<PlayerRequest, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (request, _) = bincode::decode_from_slice(data, config)?;
        Ok(request)
    }
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum GameResponse {
    Heartbeat,
    Events {
        events: Vec<Event>,
    },
    ActionError {
        action_id: usize,
        error: ActionError,
    },
}

impl GameResponse {
    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<GameResponse, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (response, _) = bincode::decode_from_slice(data, config)?;
        Ok(response)
    }
}

/// Player-invoked operations. Every action is re-validated against current
/// authoritative state immediately before execution.
#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Action {
    MoveItem {
        item: ItemId,
        source: ContainerId,
        destination: ContainerId,
    },
    AttachItem {
        host: ItemId,
        attachment: ItemId,
        source: ContainerId,
    },
    DetachItem {
        host: ItemId,
        attachment: ItemId,
    },
    ConsumeItems {
        kind: ItemKey,
        count: u8,
    },
    SetActiveSlot {
        index: isize,
    },
    CycleSlotForward,
    CycleSlotBackward,
    AddToSlot {
        index: usize,
        item: ItemId,
    },
    RemoveFromSlot {
        index: usize,
    },
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Event {
    Universe(Vec<Universe>),
    Inventory(Vec<Inventory>),
    Equipment(Vec<Equipment>),
    Quickbar(Vec<QuickbarChange>),
}

impl From<Vec<Universe>> for Event {
    fn from(events: Vec<Universe>) -> Self {
        Event::Universe(events)
    }
}

impl From<Universe> for Event {
    fn from(event: Universe) -> Self {
        Event::Universe(vec![event])
    }
}

impl From<Vec<Inventory>> for Event {
    fn from(events: Vec<Inventory>) -> Self {
        Event::Inventory(events)
    }
}

impl From<Inventory> for Event {
    fn from(event: Inventory) -> Self {
        Event::Inventory(vec![event])
    }
}

impl From<Vec<Equipment>> for Event {
    fn from(events: Vec<Equipment>) -> Self {
        Event::Equipment(events)
    }
}

impl From<Equipment> for Event {
    fn from(event: Equipment) -> Self {
        Event::Equipment(vec![event])
    }
}

impl From<Vec<QuickbarChange>> for Event {
    fn from(events: Vec<QuickbarChange>) -> Self {
        Event::Quickbar(events)
    }
}

impl From<QuickbarChange> for Event {
    fn from(event: QuickbarChange) -> Self {
        Event::Quickbar(vec![event])
    }
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum ActionError {
    Inventory(InventoryError),
    Equipment(EquipmentError),
    Quickbar(QuickbarError),
    Knowledge(DictionaryError),
    PlayerNotFound {
        player: String,
    },
    PlayerFighterNotFound {
        player: String,
    },
    Test,
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        ActionError::Inventory(error)
    }
}

impl From<EquipmentError> for ActionError {
    fn from(error: EquipmentError) -> Self {
        ActionError::Equipment(error)
    }
}

impl From<QuickbarError> for ActionError {
    fn from(error: QuickbarError) -> Self {
        ActionError::Quickbar(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        ActionError::Knowledge(error)
    }
}

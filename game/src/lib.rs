pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::equipment::EquipmentDomain;
use crate::inventory::InventoryDomain;
use crate::model::{Knowledge, Player, UniverseDomain};
use crate::quickbar::QuickbarDomain;

mod actions;
pub mod api;
pub mod collections;
pub mod data;
mod domains;
pub mod model;
pub mod replica;
mod view;

/// Folds a mixed list of domain event batches into api events.
#[macro_export]
macro_rules! occur {
    [$($event:expr),* $(,)?] => {
        vec![$($crate::api::Event::from($event)),*]
    };
}

/// Same as `occur!`, wrapped for the tail position of an action.
#[macro_export]
macro_rules! emit {
    [$($event:expr),* $(,)?] => {
        Ok(vec![$($crate::api::Event::from($event)),*])
    };
}

pub struct Game {
    pub known: Knowledge,
    pub universe: UniverseDomain,
    pub inventory: InventoryDomain,
    pub equipment: EquipmentDomain,
    pub quickbar: QuickbarDomain,
    pub players: Vec<Player>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            known: Knowledge::default(),
            universe: UniverseDomain::default(),
            inventory: InventoryDomain::default(),
            equipment: EquipmentDomain::default(),
            quickbar: QuickbarDomain::default(),
            players: vec![],
        }
    }

    /// Authoritative entry point for player requests. Every action is
    /// validated against current state by the domain commands it runs;
    /// validation and mutation happen back to back within the tick.
    pub fn perform_action(
        &mut self,
        player_name: &str,
        action: Action,
    ) -> Result<Vec<Event>, ActionError> {
        let player = self
            .players
            .iter()
            .find(|player| player.name == player_name)
            .ok_or(ActionError::PlayerNotFound {
                player: player_name.to_string(),
            })?
            .id;
        let fighter = self.universe.get_player_fighter(player).ok_or(
            ActionError::PlayerFighterNotFound {
                player: player_name.to_string(),
            },
        )?;
        match action {
            Action::MoveItem {
                item,
                source,
                destination,
            } => self.move_item(fighter, item, source, destination),
            Action::AttachItem {
                host,
                attachment,
                source,
            } => self.attach_item(fighter, host, attachment, source),
            Action::DetachItem { host, attachment } => {
                self.detach_item(fighter, host, attachment)
            }
            Action::ConsumeItems { kind, count } => self.consume_items(fighter, kind, count),
            Action::SetActiveSlot { index } => self.set_active_slot(fighter, index),
            Action::CycleSlotForward => self.cycle_slot(fighter, true),
            Action::CycleSlotBackward => self.cycle_slot(fighter, false),
            Action::AddToSlot { index, item } => self.add_to_slot(fighter, index, item),
            Action::RemoveFromSlot { index } => {
                let (_, events) = self.remove_from_slot(fighter, index)?;
                Ok(events)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

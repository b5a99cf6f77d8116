use std::collections::HashMap;

use game::api::{Action, ActionError, Event};
use game::equipment::{Attribute, EquipmentId};
use game::inventory::{Container, ContainerId, Function, Item, ItemId, ItemKey, StatKey};
use game::model::{Fighter, Player, PlayerId, Stash};
use game::quickbar::{Quickbar, QuickbarId};
use game::replica::Replica;
use game::Game;

pub const KNOWLEDGE: &str = include_str!("knowledge.json");

pub struct GameTestScenario {
    game: Game,
    observer: Replica,
    fighters: HashMap<String, Fighter>,
    containers: HashMap<String, ContainerId>,
    items: HashMap<String, ItemId>,
    current_action_result: Result<Vec<Event>, ActionError>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        let mut game = Game::new();
        game.load_game_knowledge(KNOWLEDGE).unwrap();
        GameTestScenario {
            game,
            observer: Replica::new(),
            fighters: Default::default(),
            containers: Default::default(),
            items: Default::default(),
            current_action_result: Err(ActionError::Test),
        }
    }

    pub fn item(&self, name: &str) -> ItemId {
        *self.items.get(name).unwrap()
    }

    pub fn item_key(&self, name: &str) -> ItemKey {
        self.game.known.items.find(name).unwrap().id
    }

    pub fn container(&self, name: &str) -> ContainerId {
        *self.containers.get(name).unwrap()
    }

    pub fn fighter(&self, name: &str) -> Fighter {
        *self.fighters.get(name).unwrap()
    }

    pub fn quickbar(&self, name: &str) -> QuickbarId {
        self.fighter(name).quickbar
    }

    fn equipment_of(&self, name: &str) -> Option<EquipmentId> {
        let fighter = self.fighter(name);
        self.game
            .quickbar
            .get_quickbar(fighter.quickbar)
            .unwrap()
            .equipment
    }

    pub fn given_fighter(mut self, fighter_key: &str, player_name: &str) -> Self {
        let player = PlayerId(self.game.players.len() + 1);
        self.game.players.push(Player {
            id: player,
            name: player_name.to_string(),
        });
        let kind = self.game.known.fighters.find(fighter_key).unwrap();

        let backpack = self.game.inventory.containers_id.introduce().one(ContainerId);
        let container = Container {
            id: backpack,
            kind: kind.backpack.clone(),
            items: vec![],
        };
        self.game.inventory.load_containers(vec![container], backpack.0);

        let quickbar = self.game.quickbar.quickbars_id.introduce().one(QuickbarId);
        let slots = kind.quickbar.slots;
        let component = Quickbar {
            id: quickbar,
            kind: kind.quickbar.clone(),
            slots: vec![None; slots],
            active: -1,
            equipment: None,
        };
        self.game.quickbar.load_quickbars(vec![component], quickbar.0);

        let id = self.game.universe.fighters_id + 1;
        let fighter = Fighter {
            id,
            kind: kind.id,
            player,
            backpack,
            quickbar,
        };
        self.game.universe.load_fighters(vec![fighter], id);
        self.fighters.insert(player_name.to_string(), fighter);
        self.containers
            .insert(format!("{}:backpack", player_name), backpack);
        self
    }

    pub fn given_stash(mut self, stash_name: &str) -> Self {
        let kind = self.game.known.containers.find("stash").unwrap();
        let container = self.game.inventory.containers_id.introduce().one(ContainerId);
        let component = Container {
            id: container,
            kind,
            items: vec![],
        };
        self.game.inventory.load_containers(vec![component], container.0);
        let id = self.game.universe.stashes_id + 1;
        let stash = Stash { id, container };
        self.game.universe.load_stashes(vec![stash], id);
        self.containers.insert(stash_name.to_string(), container);
        self
    }

    pub fn given_container(mut self, kind_name: &str, container_name: &str) -> Self {
        let kind = self.game.known.containers.find(kind_name).unwrap();
        let container = self.game.inventory.containers_id.introduce().one(ContainerId);
        let component = Container {
            id: container,
            kind,
            items: vec![],
        };
        self.game.inventory.load_containers(vec![component], container.0);
        self.containers.insert(container_name.to_string(), container);
        self
    }

    pub fn given_item(mut self, item_kind: &str, item_name: &str, container_name: &str) -> Self {
        let container = self.container(container_name);
        let kind = self.game.known.items.find(item_kind).unwrap();
        let id = self.game.inventory.items_id.introduce().one(ItemId);
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
            kind,
            container,
            quantity: 1,
            stats,
            parent: None,
            attachments: vec![],
        };
        self.game.inventory.load_items(vec![item], id.0);
        self.items.insert(item_name.to_string(), id);
        self
    }

    /// Creates the item next to its host and links it through the domain
    /// command, so the graph state is exactly what a runtime attach makes.
    pub fn given_attachment(mut self, item_kind: &str, item_name: &str, host_name: &str) -> Self {
        let host = self.item(host_name);
        let container = self.game.inventory.find_item(host).unwrap().container;
        let container_name = self
            .containers
            .iter()
            .find(|(_, id)| **id == container)
            .map(|(name, _)| name.clone())
            .unwrap();
        self = self.given_item(item_kind, item_name, &container_name);
        let attachment = self.item(item_name);
        let slots = self.game.known.stats.find("attachment-slots").unwrap().id;
        let attach = self
            .game
            .inventory
            .attach_item(host, attachment, slots)
            .unwrap();
        attach();
        self
    }

    pub fn given_slotted_item(mut self, player_name: &str, index: usize, item_name: &str) -> Self {
        let fighter = self.fighter(player_name);
        let item = self.item(item_name);
        let change = self
            .game
            .quickbar
            .set_slot(fighter.quickbar, index, item)
            .unwrap();
        change();
        self
    }

    pub fn given_active_slot(mut self, player_name: &str, index: isize) -> Self {
        self.game
            .perform_action(player_name, Action::SetActiveSlot { index })
            .unwrap();
        self
    }

    pub fn when_observer_syncs(mut self) -> Self {
        self.observer = Replica::new();
        self.observer.perceive(self.game.look_around());
        self
    }

    pub fn when_fighter_perform<F>(mut self, player_name: &str, action: F) -> Self
    where
        F: FnOnce(&Self) -> Action,
    {
        let action = action(&self);
        let result = self.game.perform_action(player_name, action);
        if let Ok(events) = &result {
            self.observer.perceive(events.clone());
        }
        self.current_action_result = result;
        self
    }

    pub fn then_events_should_be<F>(mut self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        assert!(
            self.current_action_result.is_ok(),
            "action failed: {:?}",
            self.current_action_result
        );
        let actual_events =
            std::mem::replace(&mut self.current_action_result, Err(ActionError::Test)).unwrap();
        let expected_events = expected_events(&self);
        let actual_events = format!("{:?}", actual_events);
        let expected_events = format!("{:?}", expected_events);
        assert_eq!(actual_events, expected_events);
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        assert!(
            self.current_action_result.is_ok(),
            "action failed: {:?}",
            self.current_action_result
        );
        self
    }

    pub fn then_action_should_fail<F>(self, expected_error: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let actual = match &self.current_action_result {
            Err(error) => format!("{:?}", error),
            Ok(events) => panic!("action succeeded unexpectedly: {:?}", events),
        };
        let expected = format!("{:?}", expected_error(&self));
        assert_eq!(actual, expected);
        self
    }

    pub fn then_attachments_should_be(self, host_name: &str, expected: Vec<&str>) -> Self {
        let host = self.item(host_name);
        let actual = self.game.inventory.get_attachments(host).unwrap().clone();
        let expected: Vec<ItemId> = expected.iter().map(|name| self.item(name)).collect();
        assert_eq!(actual, expected);
        self
    }

    pub fn then_parent_should_be(self, item_name: &str, parent: Option<&str>) -> Self {
        let item = self.item(item_name);
        let actual = self.game.inventory.find_item(item).unwrap().parent;
        let expected = parent.map(|name| self.item(name));
        assert_eq!(actual, expected);
        self
    }

    pub fn then_item_should_be_in(self, item_name: &str, container_name: &str) -> Self {
        let item = self.item(item_name);
        let container = self.container(container_name);
        let actual = self.game.inventory.find_item(item).unwrap().container;
        assert_eq!(actual, container);
        self
    }

    pub fn then_item_count_should_be(self, container_name: &str, count: usize) -> Self {
        let container = self.container(container_name);
        let actual = self.game.inventory.get_container(container).unwrap().items.len();
        assert_eq!(actual, count);
        self
    }

    pub fn then_active_slot_should_be(self, player_name: &str, index: isize) -> Self {
        let fighter = self.fighter(player_name);
        let actual = self.game.quickbar.get_quickbar(fighter.quickbar).unwrap().active;
        assert_eq!(actual, index);
        self
    }

    pub fn then_slots_should_be(self, player_name: &str, expected: Vec<Option<&str>>) -> Self {
        let fighter = self.fighter(player_name);
        let actual = self
            .game
            .quickbar
            .get_quickbar(fighter.quickbar)
            .unwrap()
            .slots
            .clone();
        let expected: Vec<Option<ItemId>> = expected
            .iter()
            .map(|slot| slot.map(|name| self.item(name)))
            .collect();
        assert_eq!(actual, expected);
        self
    }

    pub fn then_active_sources_should_be(self, player_name: &str, expected: Vec<&str>) -> Self {
        let equipment = self.equipment_of(player_name).expect("nothing equipped");
        let actual = self.game.equipment.active_sources(equipment);
        let expected: Vec<ItemId> = expected.iter().map(|name| self.item(name)).collect();
        assert_eq!(actual, expected);
        self
    }

    pub fn then_prop_count_should_be(self, player_name: &str, count: usize) -> Self {
        let equipment = self.equipment_of(player_name).expect("nothing equipped");
        assert_eq!(self.game.equipment.prop_count(equipment), count);
        self
    }

    pub fn then_attribute_total_should_be(
        self,
        player_name: &str,
        attribute: Attribute,
        total: f32,
    ) -> Self {
        let equipment = self.equipment_of(player_name).expect("nothing equipped");
        assert_eq!(self.game.equipment.attribute_total(equipment, attribute), total);
        self
    }

    pub fn then_equipment_count_should_be(self, count: usize) -> Self {
        assert_eq!(self.game.equipment.equipments.len(), count);
        self
    }

    pub fn then_nothing_should_be_equipped(self, player_name: &str) -> Self {
        assert!(self.equipment_of(player_name).is_none());
        assert!(self.game.equipment.equipments.is_empty());
        self
    }

    pub fn then_observer_items_should_be(self, container_name: &str, expected: Vec<&str>) -> Self {
        let container = self.container(container_name);
        let actual = self.observer.items_in(container);
        let mut expected: Vec<ItemId> = expected.iter().map(|name| self.item(name)).collect();
        expected.sort_by_key(|item| item.0);
        assert_eq!(actual, expected);
        self
    }

    pub fn then_observer_attachments_should_be(self, host_name: &str, expected: Vec<&str>) -> Self {
        let host = self.item(host_name);
        let actual = self.observer.attachments_of(host);
        let expected: Vec<ItemId> = expected.iter().map(|name| self.item(name)).collect();
        assert_eq!(actual, expected);
        self
    }

    pub fn then_observer_active_slot_should_be(self, player_name: &str, index: isize) -> Self {
        let quickbar = self.quickbar(player_name);
        let actual = self.observer.quickbars.get(&quickbar).unwrap().active;
        assert_eq!(actual, index);
        self
    }

    pub fn then_observer_equipment_should_match(self, player_name: &str) -> Self {
        match self.equipment_of(player_name) {
            Some(equipment) => {
                let mirror = self.observer.equipments.get(&equipment).unwrap();
                assert_eq!(mirror.props.len(), self.game.equipment.prop_count(equipment));
                let instance = self.game.equipment.get_equipment(equipment).unwrap();
                let effects: usize = instance
                    .activations
                    .iter()
                    .map(|activation| activation.effects.len())
                    .sum();
                assert_eq!(mirror.effects.len(), effects);
            }
            None => assert!(self.observer.equipments.is_empty()),
        }
        self
    }
}

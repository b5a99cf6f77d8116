use game::api::Action::MoveItem;
use game::api::{ActionError, Event};
use game::inventory::Inventory::{AttachmentChanged, ItemAdded, ItemRemoved};
use game::inventory::InventoryError::{
    ContainerIsFull, ItemAlreadyInContainer, ItemNotFound,
};
use game::inventory::{Container, ContainerId};
use game::Game;

use crate::testing::{GameTestScenario, KNOWLEDGE};

mod testing;

#[test]
fn test_move_item_to_stash() {
    GameTestScenario::new()
        .given_fighter("operator", "Alice")
        .given_stash("crate")
        .given_item("rifle", "w1", "Alice:backpack")
        .when_fighter_perform("Alice", |given| MoveItem {
            item: given.item("w1"),
            source: given.container("Alice:backpack"),
            destination: given.container("crate"),
        })
        .then_events_should_be(|given| {
            vec![Event::Inventory(vec![
                ItemRemoved {
                    item: given.item("w1"),
                    container: given.container("Alice:backpack"),
                },
                ItemAdded {
                    id: given.item("w1"),
                    kind: given.item_key("rifle"),
                    container: given.container("crate"),
                    quantity: 1,
                },
            ])]
        })
        .then_item_should_be_in("w1", "crate")
        .then_item_count_should_be("Alice:backpack", 0);
}

#[test]
fn test_move_rejected_when_absent_from_claimed_source() {
    GameTestScenario::new()
        .given_fighter("operator", "Alice")
        .given_stash("crate")
        .given_item("rifle", "w1", "crate")
        .when_fighter_perform("Alice", |given| MoveItem {
            item: given.item("w1"),
            source: given.container("Alice:backpack"),
            destination: given.container("crate"),
        })
        .then_action_should_fail(|given| {
            ActionError::Inventory(ItemNotFound {
                container: given.container("Alice:backpack"),
                item: given.item("w1"),
            })
        })
        .then_item_should_be_in("w1", "crate");
}

#[test]
fn test_move_into_same_container_rejected() {
    GameTestScenario::new()
        .given_fighter("operator", "Alice")
        .given_item("rifle", "w1", "Alice:backpack")
        .when_fighter_perform("Alice", |given| MoveItem {
            item: given.item("w1"),
            source: given.container("Alice:backpack"),
            destination: given.container("Alice:backpack"),
        })
        .then_action_should_fail(|given| {
            ActionError::Inventory(ItemAlreadyInContainer {
                container: given.container("Alice:backpack"),
                item: given.item("w1"),
            })
        });
}

#[test]
fn test_move_to_full_container_rejected() {
    GameTestScenario::new()
        .given_fighter("operator", "Alice")
        .given_container("pouch", "belt")
        .given_item("scope-mod", "s1", "belt")
        .given_item("grip-mod", "g1", "belt")
        .given_item("rifle", "w1", "Alice:backpack")
        .when_fighter_perform("Alice", |given| MoveItem {
            item: given.item("w1"),
            source: given.container("Alice:backpack"),
            destination: given.container("belt"),
        })
        .then_action_should_fail(|given| {
            ActionError::Inventory(ContainerIsFull {
                id: given.container("belt"),
            })
        })
        .then_item_should_be_in("w1", "Alice:backpack");
}

#[test]
fn test_moving_attached_attachment_detaches_it_first() {
    GameTestScenario::new()
        .given_fighter("operator", "Alice")
        .given_stash("crate")
        .given_item("rifle", "w1", "Alice:backpack")
        .given_attachment("scope-mod", "s1", "w1")
        .when_fighter_perform("Alice", |given| MoveItem {
            item: given.item("s1"),
            source: given.container("Alice:backpack"),
            destination: given.container("crate"),
        })
        .then_events_should_be(|given| {
            vec![
                Event::Inventory(vec![AttachmentChanged {
                    host: given.item("w1"),
                    attachment: given.item("s1"),
                    delta: -1,
                }]),
                Event::Inventory(vec![
                    ItemRemoved {
                        item: given.item("s1"),
                        container: given.container("Alice:backpack"),
                    },
                    ItemAdded {
                        id: given.item("s1"),
                        kind: given.item_key("scope-mod"),
                        container: given.container("crate"),
                        quantity: 1,
                    },
                ]),
            ]
        })
        .then_parent_should_be("s1", None)
        .then_attachments_should_be("w1", vec![])
        .then_item_should_be_in("s1", "crate");
}

#[test]
fn test_discarding_absent_item_is_noop() {
    let mut game = Game::new();
    game.load_game_knowledge(KNOWLEDGE).unwrap();
    let kind = game.known.containers.find("backpack").unwrap();
    let container = ContainerId(1);
    game.inventory.load_containers(
        vec![Container {
            id: container,
            kind,
            items: vec![],
        }],
        container.0,
    );
    let key = game.known.items.find("rifle").unwrap().id;
    let (item, _) = game.acquire_item(key, container, 1).unwrap();

    let events = game.discard_item(container, item).unwrap();
    assert_eq!(events.len(), 1);
    assert!(game.inventory.find_item(item).is_err());

    let events = game.discard_item(container, item).unwrap();
    assert!(events.is_empty());
}

#[test]
fn test_unknown_player_is_rejected() {
    GameTestScenario::new()
        .given_fighter("operator", "Alice")
        .given_item("rifle", "w1", "Alice:backpack")
        .when_fighter_perform("Bob", |given| MoveItem {
            item: given.item("w1"),
            source: given.container("Alice:backpack"),
            destination: given.container("Alice:backpack"),
        })
        .then_action_should_fail(|_| ActionError::PlayerNotFound {
            player: "Bob".to_string(),
        });
}

use crate::api::Event;
use crate::equipment::Equipment;
use crate::model::Universe;
use crate::quickbar::QuickbarChange;
use crate::Game;

impl Game {
    /// Full state snapshot for a newly joined observer. Replaying these
    /// events into an empty mirror yields the current observable state.
    ///
    /// Players are loaded together with their fighters, so the name
    /// lookup cannot miss.
    pub fn look_around(&self) -> Vec<Event> {
        let mut stream = vec![];
        for fighter in self.universe.fighters.iter() {
            let player = self
                .players
                .iter()
                .find(|player| player.id == fighter.player)
                .unwrap();
            stream.push(Universe::FighterAppeared {
                fighter: *fighter,
                player: player.name.clone(),
            });
        }
        for stash in &self.universe.stashes {
            stream.push(Universe::StashAppeared { stash: *stash });
        }
        let mut items = vec![];
        for container in self.inventory.containers.values() {
            for item in &container.items {
                items.push(item.as_data());
            }
        }
        stream.push(Universe::ItemsAppeared { items });

        let mut equipment_stream = vec![];
        for instance in self.equipment.equipments.values() {
            equipment_stream.push(Equipment::EquipmentCreated {
                id: instance.id,
                kind: instance.kind.id,
                item: instance.item,
            });
            for prop in &instance.props {
                equipment_stream.push(Equipment::PropSpawned {
                    id: prop.id,
                    kind: prop.kind.id,
                    equipment: instance.id,
                    socket: prop.socket.clone(),
                    attachment: None,
                });
            }
            for activation in &instance.activations {
                for effect in &activation.effects {
                    equipment_stream.push(Equipment::EffectApplied {
                        id: effect.id,
                        kind: effect.kind.id,
                        equipment: instance.id,
                        source: activation.item,
                    });
                }
                for prop in &activation.props {
                    equipment_stream.push(Equipment::PropSpawned {
                        id: prop.id,
                        kind: prop.kind.id,
                        equipment: instance.id,
                        socket: prop.socket.clone(),
                        attachment: Some(activation.item),
                    });
                }
            }
        }

        let mut quickbar_stream = vec![];
        for quickbar in self.quickbar.quickbars.values() {
            quickbar_stream.push(QuickbarChange::SlotsChanged {
                id: quickbar.id,
                slots: quickbar.slots.clone(),
            });
            quickbar_stream.push(QuickbarChange::ActiveIndexChanged {
                id: quickbar.id,
                index: quickbar.active,
            });
        }

        vec![
            Event::Universe(stream),
            Event::Equipment(equipment_stream),
            Event::Quickbar(quickbar_stream),
        ]
    }
}

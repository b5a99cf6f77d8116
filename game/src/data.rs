use log::info;
use serde::Deserialize;

use crate::collections::DictionaryError;
use crate::equipment::{
    AttachmentKey, AttachmentKind, Attribute, EffectKey, EffectKind, EquipmentKey, EquipmentKind,
    PropKey, PropKind, PropSpec,
};
use crate::inventory::{ContainerKey, ContainerKind, Function, ItemKey, ItemKind, StatKey, StatKind};
use crate::model::{FighterKey, FighterKind};
use crate::quickbar::{QuickbarKey, QuickbarKind};
use crate::Game;

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Knowledge(DictionaryError),
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Json(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        DataError::Knowledge(error)
    }
}

#[derive(Deserialize)]
struct KnowledgeData {
    stats: Vec<StatKindData>,
    props: Vec<PropKindData>,
    effects: Vec<EffectKindData>,
    equipments: Vec<EquipmentKindData>,
    attachments: Vec<AttachmentKindData>,
    containers: Vec<ContainerKindData>,
    items: Vec<ItemKindData>,
    quickbars: Vec<QuickbarKindData>,
    fighters: Vec<FighterKindData>,
}

#[derive(Deserialize)]
struct StatKindData {
    id: usize,
    name: String,
}

#[derive(Deserialize)]
struct PropKindData {
    id: usize,
    name: String,
}

#[derive(Deserialize)]
struct EffectKindData {
    id: usize,
    name: String,
    attribute: Attribute,
    magnitude: f32,
}

#[derive(Deserialize)]
struct PropSpecData {
    prop: String,
    socket: String,
}

#[derive(Deserialize)]
struct EquipmentKindData {
    id: usize,
    name: String,
    props: Vec<PropSpecData>,
}

#[derive(Deserialize)]
struct AttachmentKindData {
    id: usize,
    name: String,
    effects: Vec<String>,
    props: Vec<PropSpecData>,
}

#[derive(Deserialize)]
struct ContainerKindData {
    id: usize,
    name: String,
    capacity: usize,
}

#[derive(Deserialize)]
struct ItemKindData {
    id: usize,
    name: String,
    #[serde(default)]
    stackable: bool,
    #[serde(default = "default_max_quantity")]
    max_quantity: u8,
    functions: Vec<Function>,
}

fn default_max_quantity() -> u8 {
    1
}

#[derive(Deserialize)]
struct QuickbarKindData {
    id: usize,
    name: String,
    slots: usize,
}

#[derive(Deserialize)]
struct FighterKindData {
    id: usize,
    name: String,
    backpack: String,
    quickbar: String,
}

impl Game {
    /// Loads the immutable catalog. Kinds referencing other kinds come
    /// later in the document and are resolved by name.
    pub fn load_game_knowledge(&mut self, document: &str) -> Result<(), DataError> {
        info!("Begin game knowledge loading");
        let data: KnowledgeData = serde_json::from_str(document)?;
        for kind in data.stats {
            let id = StatKey(kind.id);
            self.known
                .stats
                .insert(id, kind.name.clone(), StatKind { id, name: kind.name });
        }
        for kind in data.props {
            let id = PropKey(kind.id);
            self.known
                .props
                .insert(id, kind.name.clone(), PropKind { id, name: kind.name });
        }
        for kind in data.effects {
            let id = EffectKey(kind.id);
            let record = EffectKind {
                id,
                name: kind.name.clone(),
                attribute: kind.attribute,
                magnitude: kind.magnitude,
            };
            self.known.effects.insert(id, kind.name, record);
        }
        for kind in data.equipments {
            let id = EquipmentKey(kind.id);
            let record = EquipmentKind {
                id,
                name: kind.name.clone(),
                props: self.load_prop_specs(kind.props)?,
            };
            self.known.equipments.insert(id, kind.name, record);
        }
        for kind in data.attachments {
            let id = AttachmentKey(kind.id);
            let mut effects = vec![];
            for name in kind.effects {
                effects.push(self.known.effects.find(&name)?);
            }
            let record = AttachmentKind {
                id,
                name: kind.name.clone(),
                effects,
                props: self.load_prop_specs(kind.props)?,
            };
            self.known.attachments.insert(id, kind.name, record);
        }
        for kind in data.containers {
            let id = ContainerKey(kind.id);
            let record = ContainerKind {
                id,
                name: kind.name.clone(),
                capacity: kind.capacity,
            };
            self.known.containers.insert(id, kind.name, record);
        }
        for kind in data.items {
            let id = ItemKey(kind.id);
            let record = ItemKind {
                id,
                name: kind.name.clone(),
                stackable: kind.stackable,
                max_quantity: kind.max_quantity,
                functions: kind.functions,
            };
            self.known.items.insert(id, kind.name, record);
        }
        for kind in data.quickbars {
            let id = QuickbarKey(kind.id);
            let record = QuickbarKind {
                id,
                name: kind.name.clone(),
                slots: kind.slots,
            };
            self.known.quickbars.insert(id, kind.name, record);
        }
        for kind in data.fighters {
            let id = FighterKey(kind.id);
            let record = FighterKind {
                id,
                name: kind.name.clone(),
                backpack: self.known.containers.find(&kind.backpack)?,
                quickbar: self.known.quickbars.find(&kind.quickbar)?,
            };
            self.known.fighters.insert(id, kind.name, record);
        }
        info!(
            "End game knowledge loading, {} items, {} attachments",
            self.known.items.len(),
            self.known.attachments.len()
        );
        Ok(())
    }

    fn load_prop_specs(&self, specs: Vec<PropSpecData>) -> Result<Vec<PropSpec>, DataError> {
        let mut props = vec![];
        for spec in specs {
            props.push(PropSpec {
                prop: self.known.props.find(&spec.prop)?,
                socket: spec.socket,
            });
        }
        Ok(props)
    }
}

use crate::collections::{Dictionary, Shared};
use crate::equipment::{AttachmentKey, AttachmentKind, EffectKey, EffectKind, EquipmentKey,
    EquipmentKind, PropKey, PropKind};
use crate::inventory::{ContainerId, ContainerKey, ContainerKind, ItemData, ItemKey, ItemKind,
    StatKey, StatKind};
use crate::quickbar::{QuickbarId, QuickbarKey, QuickbarKind};

#[derive(Default)]
pub struct Knowledge {
    // inventory
    pub stats: Dictionary<StatKey, StatKind>,
    pub containers: Dictionary<ContainerKey, ContainerKind>,
    pub items: Dictionary<ItemKey, ItemKind>,
    // equipment
    pub effects: Dictionary<EffectKey, EffectKind>,
    pub props: Dictionary<PropKey, PropKind>,
    pub equipments: Dictionary<EquipmentKey, EquipmentKind>,
    pub attachments: Dictionary<AttachmentKey, AttachmentKind>,
    // universe
    pub quickbars: Dictionary<QuickbarKey, QuickbarKind>,
    pub fighters: Dictionary<FighterKey, FighterKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct PlayerId(pub usize);

pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct FighterKey(pub usize);

pub struct FighterKind {
    pub id: FighterKey,
    pub name: String,
    pub backpack: Shared<ContainerKind>,
    pub quickbar: Shared<QuickbarKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct Fighter {
    pub id: usize,
    pub kind: FighterKey,
    pub player: PlayerId,
    pub backpack: ContainerId,
    pub quickbar: QuickbarId,
}

/// A world item container fighters can trade items with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct Stash {
    pub id: usize,
    pub container: ContainerId,
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum Universe {
    FighterAppeared {
        fighter: Fighter,
        player: String,
    },
    StashAppeared {
        stash: Stash,
    },
    ItemsAppeared {
        items: Vec<ItemData>,
    },
}

#[derive(Default)]
pub struct UniverseDomain {
    pub fighters: Vec<Fighter>,
    pub fighters_id: usize,
    pub stashes: Vec<Stash>,
    pub stashes_id: usize,
}

impl UniverseDomain {
    pub fn load_fighters(&mut self, fighters: Vec<Fighter>, sequence: usize) {
        self.fighters_id = sequence;
        self.fighters.extend(fighters);
    }

    pub fn load_stashes(&mut self, stashes: Vec<Stash>, sequence: usize) {
        self.stashes_id = sequence;
        self.stashes.extend(stashes);
    }

    pub fn get_player_fighter(&self, player: PlayerId) -> Option<Fighter> {
        self.fighters
            .iter()
            .find(|fighter| fighter.player == player)
            .copied()
    }
}

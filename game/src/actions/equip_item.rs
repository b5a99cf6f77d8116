use log::debug;

use crate::api::{ActionError, Event};
use crate::equipment::{AttachmentKey, EquipmentKey};
use crate::inventory::FunctionsQuery;
use crate::model::Fighter;
use crate::{occur, Game};

impl Game {
    /// Brings the active slot's item into the equipped state: allocates
    /// the equipment instance, spawns its props, then activates every
    /// attached item in slot-fill order. An empty or non-equippable
    /// selection equips nothing.
    pub(crate) fn equip_slot_item(&mut self, fighter: Fighter) -> Result<Vec<Event>, ActionError> {
        let quickbar = self.quickbar.get_quickbar(fighter.quickbar)?;
        // the previous instance must be fully released before this runs
        debug_assert!(quickbar.equipment.is_none());
        let item = match quickbar.active_item() {
            Some(item) => item,
            None => return Ok(vec![]),
        };
        let slot_item = self.inventory.find_item(item)?;
        let key = match slot_item.kind.functions.as_equippable() {
            Ok(key) => key,
            Err(_) => return Ok(vec![]),
        };
        let attachments = slot_item.attachments.clone();
        let kind = self.known.equipments.get(EquipmentKey(key))?;
        debug!("Fighter {} equips {:?} as '{}'", fighter.id, item, kind.name);
        let (equipment, create) = self.equipment.create_equipment(&kind, item)?;
        let mut events = occur![create()];
        self.quickbar.assign_equipment(fighter.quickbar, Some(equipment))?;
        for attachment in attachments {
            let key = self
                .inventory
                .find_item(attachment)?
                .kind
                .functions
                .as_attachable()?;
            let kind = self.known.attachments.get(AttachmentKey(key))?;
            let activate = self
                .equipment
                .activate_attachment(equipment, attachment, &kind)?;
            events.extend(occur![activate()]);
        }
        Ok(events)
    }

    /// Reverses `equip_slot_item` completely; safe to call with nothing
    /// equipped.
    pub(crate) fn unequip_slot_item(
        &mut self,
        fighter: Fighter,
    ) -> Result<Vec<Event>, ActionError> {
        let quickbar = self.quickbar.get_quickbar(fighter.quickbar)?;
        let equipment = match quickbar.equipment {
            Some(equipment) => equipment,
            None => return Ok(vec![]),
        };
        debug!("Fighter {} unequips {:?}", fighter.id, equipment);
        let release = self.equipment.release_equipment(equipment)?;
        let events = occur![release()];
        self.quickbar.assign_equipment(fighter.quickbar, None)?;
        Ok(events)
    }
}

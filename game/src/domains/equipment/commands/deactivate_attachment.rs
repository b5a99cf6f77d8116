use crate::equipment::Equipment::{EffectRemoved, PropDestroyed};
use crate::equipment::{Equipment, EquipmentDomain, EquipmentError, EquipmentId};
use crate::inventory::ItemId;

impl EquipmentDomain {
    /// Reverses one attachment activation: every effect the attachment
    /// sourced is removed and every prop it spawned is destroyed. Keys off
    /// the instance's own activation records; the bound item may already
    /// have lost the attachment by the time this runs.
    pub fn deactivate_attachment<'operation>(
        &'operation mut self,
        equipment: EquipmentId,
        item: ItemId,
    ) -> Result<impl FnOnce() -> Vec<Equipment> + 'operation, EquipmentError> {
        let instance = self.get_equipment(equipment)?;
        let index = instance
            .activations
            .iter()
            .position(|activation| activation.item == item)
            .ok_or(EquipmentError::AttachmentNotActive { equipment, item })?;
        let operation = move || {
            let instance = self.equipments.get_mut(&equipment).unwrap();
            let activation = instance.activations.remove(index);
            let mut events = vec![];
            for effect in activation.effects {
                events.push(EffectRemoved {
                    id: effect.id,
                    equipment,
                });
            }
            for prop in activation.props {
                events.push(PropDestroyed {
                    id: prop.id,
                    equipment,
                });
            }
            events
        };
        Ok(operation)
    }
}

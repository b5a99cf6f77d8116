use crate::equipment::Equipment::{
    EffectRemoved, EquipmentReleased, PropDestroyed,
};
use crate::equipment::{Equipment, EquipmentDomain, EquipmentError, EquipmentId};

impl EquipmentDomain {
    /// Tears the instance down completely: every activation is reversed,
    /// the primary props are destroyed, the instance is dropped. Nothing
    /// survives for the next equip to trip over.
    pub fn release_equipment<'operation>(
        &'operation mut self,
        equipment: EquipmentId,
    ) -> Result<impl FnOnce() -> Vec<Equipment> + 'operation, EquipmentError> {
        self.get_equipment(equipment)?;
        let operation = move || {
            let instance = self.equipments.remove(&equipment).unwrap();
            let mut events = vec![];
            for activation in instance.activations {
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
            }
            for prop in instance.props {
                events.push(PropDestroyed {
                    id: prop.id,
                    equipment,
                });
            }
            events.push(EquipmentReleased { id: equipment });
            events
        };
        Ok(operation)
    }
}

use crate::collections::Shared;
use crate::equipment::Equipment::{EffectApplied, PropSpawned};
use crate::equipment::{
    ActiveEffect, Activation, AttachmentKind, EffectId, Equipment, EquipmentDomain, EquipmentError,
    EquipmentId, Prop, PropId,
};
use crate::inventory::ItemId;

impl EquipmentDomain {
    /// Applies one attachment's effect set and spawns its props on a live
    /// equipment instance. Activating an already active attachment is
    /// rejected, so the reaction to a replayed delta stays harmless.
    pub fn activate_attachment<'operation>(
        &'operation mut self,
        equipment: EquipmentId,
        item: ItemId,
        kind: &Shared<AttachmentKind>,
    ) -> Result<impl FnOnce() -> Vec<Equipment> + 'operation, EquipmentError> {
        let instance = self.get_equipment(equipment)?;
        if instance.is_active(item) {
            return Err(EquipmentError::AttachmentAlreadyActive { equipment, item });
        }
        let kind = kind.clone();
        let operation = move || {
            let mut events = vec![];
            let mut effects = vec![];
            for effect_kind in &kind.effects {
                let effect = ActiveEffect {
                    id: self.effects_id.one(EffectId),
                    kind: effect_kind.clone(),
                    source: item,
                };
                events.push(EffectApplied {
                    id: effect.id,
                    kind: effect.kind.id,
                    equipment,
                    source: item,
                });
                effects.push(effect);
            }
            let mut props = vec![];
            for spec in &kind.props {
                let prop = Prop {
                    id: self.props_id.one(PropId),
                    kind: spec.prop.clone(),
                    socket: spec.socket.clone(),
                };
                events.push(PropSpawned {
                    id: prop.id,
                    kind: prop.kind.id,
                    equipment,
                    socket: prop.socket.clone(),
                    attachment: Some(item),
                });
                props.push(prop);
            }
            let instance = self.equipments.get_mut(&equipment).unwrap();
            instance.activations.push(Activation {
                item,
                effects,
                props,
            });
            events
        };
        Ok(operation)
    }
}

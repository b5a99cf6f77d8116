use crate::collections::Shared;
use crate::equipment::Equipment::{EquipmentCreated, PropSpawned};
use crate::equipment::{
    Equipment, EquipmentDomain, EquipmentError, EquipmentId, EquipmentInstance, EquipmentKind,
    Prop, PropId,
};
use crate::inventory::ItemId;

impl EquipmentDomain {
    /// Allocates the runtime instance for an equipped item and spawns its
    /// primary props. At most one instance may be bound to an item.
    pub fn create_equipment<'operation>(
        &'operation mut self,
        kind: &Shared<EquipmentKind>,
        item: ItemId,
    ) -> Result<(EquipmentId, impl FnOnce() -> Vec<Equipment> + 'operation), EquipmentError> {
        if self.get_equipment_by_item(item).is_some() {
            return Err(EquipmentError::ItemAlreadyEquipped { item });
        }
        let id = self.equipments_id.introduce().one(EquipmentId);
        let kind = kind.clone();
        let operation = move || {
            self.equipments_id.register(id.0);
            let mut events = vec![EquipmentCreated {
                id,
                kind: kind.id,
                item,
            }];
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
                    equipment: id,
                    socket: prop.socket.clone(),
                    attachment: None,
                });
                props.push(prop);
            }
            let instance = EquipmentInstance {
                id,
                kind,
                item,
                props,
                activations: vec![],
            };
            self.equipments.insert(id, instance);
            events
        };
        Ok((id, operation))
    }
}

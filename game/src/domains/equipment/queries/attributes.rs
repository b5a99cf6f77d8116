use crate::equipment::{Attribute, EquipmentDomain, EquipmentId};
use crate::inventory::ItemId;

impl EquipmentDomain {
    /// Sums one attribute over every effect the instance currently carries.
    pub fn attribute_total(&self, equipment: EquipmentId, attribute: Attribute) -> f32 {
        match self.equipments.get(&equipment) {
            Some(instance) => instance
                .activations
                .iter()
                .flat_map(|activation| activation.effects.iter())
                .filter(|effect| effect.kind.attribute == attribute)
                .map(|effect| effect.kind.magnitude)
                .sum(),
            None => 0.0,
        }
    }

    pub fn active_sources(&self, equipment: EquipmentId) -> Vec<ItemId> {
        match self.equipments.get(&equipment) {
            Some(instance) => instance
                .activations
                .iter()
                .map(|activation| activation.item)
                .collect(),
            None => vec![],
        }
    }

    /// Primary props plus every attachment prop.
    pub fn prop_count(&self, equipment: EquipmentId) -> usize {
        match self.equipments.get(&equipment) {
            Some(instance) => {
                instance.props.len()
                    + instance
                        .activations
                        .iter()
                        .map(|activation| activation.props.len())
                        .sum::<usize>()
            }
            None => 0,
        }
    }
}

use crate::inventory::ItemId;
use crate::quickbar::QuickbarChange::SlotsChanged;
use crate::quickbar::{QuickbarChange, QuickbarDomain, QuickbarError, QuickbarId};

impl QuickbarDomain {
    pub fn set_slot<'operation>(
        &'operation mut self,
        id: QuickbarId,
        index: usize,
        item: ItemId,
    ) -> Result<impl FnOnce() -> Vec<QuickbarChange> + 'operation, QuickbarError> {
        let quickbar = self.get_quickbar(id)?;
        let slot = quickbar
            .slots
            .get(index)
            .ok_or(QuickbarError::SlotNotFound {
                id,
                index: index as isize,
            })?;
        if slot.is_some() {
            return Err(QuickbarError::SlotOccupied { id, index });
        }
        let operation = move || {
            let quickbar = self.quickbars.get_mut(&id).unwrap();
            quickbar.slots[index] = Some(item);
            vec![SlotsChanged {
                id,
                slots: quickbar.slots.clone(),
            }]
        };
        Ok(operation)
    }
}

use crate::inventory::ItemId;
use crate::quickbar::QuickbarChange::SlotsChanged;
use crate::quickbar::{QuickbarChange, QuickbarDomain, QuickbarError, QuickbarId};

impl QuickbarDomain {
    pub fn clear_slot<'operation>(
        &'operation mut self,
        id: QuickbarId,
        index: usize,
    ) -> Result<(ItemId, impl FnOnce() -> Vec<QuickbarChange> + 'operation), QuickbarError> {
        let quickbar = self.get_quickbar(id)?;
        let slot = quickbar
            .slots
            .get(index)
            .ok_or(QuickbarError::SlotNotFound {
                id,
                index: index as isize,
            })?;
        let item = slot.ok_or(QuickbarError::SlotEmpty { id, index })?;
        let operation = move || {
            let quickbar = self.quickbars.get_mut(&id).unwrap();
            quickbar.slots[index] = None;
            vec![SlotsChanged {
                id,
                slots: quickbar.slots.clone(),
            }]
        };
        Ok((item, operation))
    }
}

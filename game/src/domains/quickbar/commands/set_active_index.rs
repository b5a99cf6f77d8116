use crate::quickbar::QuickbarChange::ActiveIndexChanged;
use crate::quickbar::{QuickbarChange, QuickbarDomain, QuickbarError, QuickbarId};

impl QuickbarDomain {
    /// Moves the active selection. Index -1 drops the selection; any other
    /// index must address an existing slot.
    pub fn set_active_index<'operation>(
        &'operation mut self,
        id: QuickbarId,
        index: isize,
    ) -> Result<impl FnOnce() -> Vec<QuickbarChange> + 'operation, QuickbarError> {
        let quickbar = self.get_quickbar(id)?;
        if index < -1 || index >= quickbar.slots.len() as isize {
            return Err(QuickbarError::SlotNotFound { id, index });
        }
        let operation = move || {
            let quickbar = self.quickbars.get_mut(&id).unwrap();
            quickbar.active = index;
            vec![ActiveIndexChanged { id, index }]
        };
        Ok(operation)
    }
}

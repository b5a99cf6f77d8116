use crate::api::{ActionError, Event};
use crate::inventory::ItemId;
use crate::model::Fighter;
use crate::Game;

impl Game {
    /// Detaching an instance that is not attached is a no-op, not an error.
    pub(crate) fn detach_item(
        &mut self,
        _fighter: Fighter,
        host: ItemId,
        attachment: ItemId,
    ) -> Result<Vec<Event>, ActionError> {
        let attached = self.inventory.get_attachments(host)?.contains(&attachment);
        if !attached {
            return Ok(vec![]);
        }
        self.release_attachment(host, attachment)
    }
}

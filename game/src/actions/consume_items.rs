use crate::api::{ActionError, Event};
use crate::inventory::ItemKey;
use crate::model::Fighter;
use crate::{emit, Game};

impl Game {
    pub(crate) fn consume_items(
        &mut self,
        fighter: Fighter,
        kind: ItemKey,
        count: u8,
    ) -> Result<Vec<Event>, ActionError> {
        let consume = self.inventory.consume_items(fighter.backpack, kind, count)?;
        emit![consume()]
    }
}

use crate::api::{ActionError, Event};
use crate::model::Fighter;
use crate::Game;

impl Game {
    /// Advances the selection to the next populated slot, wrapping around.
    /// With fewer than two populated slots there is nowhere to cycle to;
    /// a single item is still selectable through `set_active_slot`.
    pub(crate) fn cycle_slot(
        &mut self,
        fighter: Fighter,
        forward: bool,
    ) -> Result<Vec<Event>, ActionError> {
        let quickbar = self.quickbar.get_quickbar(fighter.quickbar)?;
        if quickbar.populated() < 2 {
            return Ok(vec![]);
        }
        match quickbar.next_populated(forward) {
            Some(next) => self.set_active_slot(fighter, next),
            None => Ok(vec![]),
        }
    }
}

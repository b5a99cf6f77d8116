use crate::api::{ActionError, Event};
use crate::inventory::{ContainerId, FunctionsQuery, ItemId, ItemKey};
use crate::{occur, Game};

impl Game {
    /// Creates an item from its definition. Kinds that grant initial
    /// attachments get them created alongside and attached immediately;
    /// a catalog granting more than the host's slots can take is an error
    /// here, not a silently shorter attachment list.
    pub fn acquire_item(
        &mut self,
        kind: ItemKey,
        container: ContainerId,
        quantity: u8,
    ) -> Result<(ItemId, Vec<Event>), ActionError> {
        let item_kind = self.known.items.get(kind)?;
        let (host, create) = self.inventory.create_item(&item_kind, container, quantity)?;
        let mut events = occur![create()];
        let initial = item_kind.functions.as_attachments().unwrap_or_default();
        if !initial.is_empty() {
            let slots = self.known.stats.find("attachment-slots")?.id;
            for key in initial {
                let attachment_kind = self.known.items.get(ItemKey(key))?;
                let (attachment, create) =
                    self.inventory.create_item(&attachment_kind, container, 1)?;
                events.extend(occur![create()]);
                let attach = self.inventory.attach_item(host, attachment, slots)?;
                events.extend(occur![attach()]);
            }
        }
        Ok((host, events))
    }
}

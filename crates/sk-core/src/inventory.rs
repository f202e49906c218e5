use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemId};

/// Default number of items a player can carry.
pub const DEFAULT_CAPACITY: usize = 10;

/// Anything that can hold items: rooms and inventories.
pub trait ItemContainer {
    /// Items currently held, in insertion order.
    fn items(&self) -> &[Item];

    /// Maximum number of items, or `None` if unbounded.
    fn capacity(&self) -> Option<usize> {
        None
    }

    /// Whether one more item fits.
    fn has_room(&self) -> bool {
        self.capacity().is_none_or(|cap| self.items().len() < cap)
    }

    /// Remove and return the item at `index`.
    fn remove_at(&mut self, index: usize) -> Option<Item>;

    /// Insert an item, handing it back if the container is full.
    fn insert(&mut self, item: Item) -> Result<(), Item>;

    /// Index of the item with the given ID.
    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items().iter().position(|i| &i.id == id)
    }

    /// Whether the item with the given ID is held.
    fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }
}

/// Move the item at `index` from one container to another.
///
/// Capacity is checked before anything is removed, so a rejected transfer
/// leaves both containers untouched. The item is never in both containers
/// and never in neither.
pub fn transfer<F, T>(from: &mut F, index: usize, to: &mut T) -> CoreResult<ItemId>
where
    F: ItemContainer + ?Sized,
    T: ItemContainer + ?Sized,
{
    if !to.has_room() {
        return Err(CoreError::InventoryFull {
            capacity: to.capacity().unwrap_or_default(),
        });
    }

    let item = from.remove_at(index).ok_or(CoreError::EmptySlot(index))?;
    let id = item.id.clone();
    match to.insert(item) {
        Ok(()) => {
            log::debug!("transferred item {id}");
            Ok(id)
        }
        Err(item) => {
            // Unbounded sources never reject, so the item goes back.
            let _ = from.insert(item);
            Err(CoreError::InventoryFull {
                capacity: to.capacity().unwrap_or_default(),
            })
        }
    }
}

/// A bounded, ordered set of carried items.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    /// Create an empty inventory. Capacity is at least 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the inventory is at capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Names of carried items, in pick-up order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.name.as_str()).collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ItemContainer for Inventory {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn remove_at(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    fn insert(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;
    use proptest::prelude::*;

    fn numbered(n: usize) -> Item {
        Item::new(format!("pebble-{n}"), format!("pebble {n}"), "A pebble.")
    }

    fn room_with(n: usize) -> Room {
        (0..n).fold(Room::new("quarry", "Quarry", "Rocks."), |room, i| {
            room.with_item(numbered(i))
        })
    }

    #[test]
    fn transfer_moves_item() {
        let mut room = room_with(1);
        let mut inv = Inventory::default();
        let id = transfer(&mut room, 0, &mut inv).unwrap();
        assert_eq!(id, ItemId::new("pebble-0"));
        assert!(room.items().is_empty());
        assert!(inv.contains(&id));
    }

    #[test]
    fn full_inventory_rejects_without_mutation() {
        let mut room = room_with(3);
        let mut inv = Inventory::new(2);
        transfer(&mut room, 0, &mut inv).unwrap();
        transfer(&mut room, 0, &mut inv).unwrap();
        let err = transfer(&mut room, 0, &mut inv).unwrap_err();
        assert!(matches!(err, CoreError::InventoryFull { capacity: 2 }));
        assert_eq!(room.items().len(), 1);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn empty_slot_is_an_error() {
        let mut room = room_with(0);
        let mut inv = Inventory::default();
        assert!(matches!(
            transfer(&mut room, 4, &mut inv),
            Err(CoreError::EmptySlot(4))
        ));
    }

    #[test]
    fn capacity_is_at_least_one() {
        let inv = Inventory::new(0);
        assert_eq!(inv.capacity(), Some(1));
    }

    #[test]
    fn names_keep_pickup_order() {
        let mut room = room_with(3);
        let mut inv = Inventory::default();
        transfer(&mut room, 2, &mut inv).unwrap();
        transfer(&mut room, 0, &mut inv).unwrap();
        assert_eq!(inv.names(), vec!["pebble 2", "pebble 0"]);
    }

    proptest! {
        #[test]
        fn items_are_conserved(moves in prop::collection::vec((any::<bool>(), 0usize..16), 0..64)) {
            let mut room = room_with(14);
            let mut inv = Inventory::default();
            for (take, index) in moves {
                let _ = if take {
                    transfer(&mut room, index, &mut inv)
                } else {
                    transfer(&mut inv, index, &mut room)
                };
                prop_assert!(inv.len() <= DEFAULT_CAPACITY);
                prop_assert_eq!(room.items().len() + inv.len(), 14);
                for item in inv.items() {
                    prop_assert!(!room.contains(&item.id));
                }
            }
        }
    }
}

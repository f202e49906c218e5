use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::inventory::ItemContainer;
use crate::item::ItemId;
use crate::room::{Direction, Room, RoomId};

/// The room graph. Owns every room for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct World {
    /// Display name of the world.
    pub name: String,
    rooms: HashMap<RoomId, Room>,
    order: Vec<RoomId>,
    start: Option<RoomId>,
}

impl World {
    /// Create an empty world.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: HashMap::new(),
            order: Vec::new(),
            start: None,
        }
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    /// Add a room. The first room added becomes the start room.
    pub fn add_room(&mut self, room: Room) -> CoreResult<RoomId> {
        let id = room.id.clone();
        if self.rooms.contains_key(&id) {
            return Err(CoreError::DuplicateRoom(id));
        }
        if self.start.is_none() {
            self.start = Some(id.clone());
        }
        self.order.push(id.clone());
        self.rooms.insert(id.clone(), room);
        Ok(id)
    }

    /// Choose the start room.
    pub fn set_start(&mut self, id: &RoomId) -> CoreResult<()> {
        if !self.rooms.contains_key(id) {
            return Err(CoreError::UnknownRoom(id.clone()));
        }
        self.start = Some(id.clone());
        Ok(())
    }

    /// Add a one-way open exit.
    pub fn connect(&mut self, from: &RoomId, direction: Direction, to: &RoomId) -> CoreResult<()> {
        self.ensure(to)?;
        self.room_mut(from)
            .ok_or_else(|| CoreError::UnknownRoom(from.clone()))?
            .add_exit(direction, to.clone());
        Ok(())
    }

    /// Add a one-way exit that needs an item to pass.
    pub fn connect_gated(
        &mut self,
        from: &RoomId,
        direction: Direction,
        to: &RoomId,
        requires: ItemId,
    ) -> CoreResult<()> {
        self.ensure(to)?;
        self.room_mut(from)
            .ok_or_else(|| CoreError::UnknownRoom(from.clone()))?
            .add_gated_exit(direction, to.clone(), requires);
        Ok(())
    }

    /// Add open exits both ways, using the opposite direction for the return.
    pub fn link(&mut self, a: &RoomId, direction: Direction, b: &RoomId) -> CoreResult<()> {
        self.connect(a, direction, b)?;
        self.connect(b, direction.opposite(), a)
    }

    /// Check that every exit leads to a known room and a start room exists.
    pub fn validate(&self) -> CoreResult<()> {
        if self.start.is_none() {
            return Err(CoreError::NoStartRoom);
        }
        for id in &self.order {
            let room = &self.rooms[id];
            for (direction, exit) in room.exits() {
                if !self.rooms.contains_key(&exit.target) {
                    return Err(CoreError::DanglingExit {
                        from: id.clone(),
                        direction,
                        to: exit.target.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn ensure(&self, id: &RoomId) -> CoreResult<()> {
        if self.rooms.contains_key(id) {
            Ok(())
        } else {
            Err(CoreError::UnknownRoom(id.clone()))
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The start room.
    pub fn start(&self) -> CoreResult<&RoomId> {
        self.start.as_ref().ok_or(CoreError::NoStartRoom)
    }

    /// A room by ID.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// A mutable room by ID.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Find a room by display name (case-insensitive).
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.rooms()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// All rooms in the order they were added.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room currently holding an item, if any.
    pub fn locate_item(&self, id: &ItemId) -> Option<&RoomId> {
        self.rooms().find(|r| r.contains(id)).map(|r| &r.id)
    }

    /// Total number of items lying in rooms.
    pub fn item_count(&self) -> usize {
        self.rooms().map(|r| r.items().len()).sum()
    }
}

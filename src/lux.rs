use serde::{Deserialize, Serialize};

use crate::error::LumenError;

/// Room type whose lux value always comes from the caller.
pub const CUSTOM_ROOM: &str = "Custom";

/// One row of the room brightness table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLux {
    pub name: String,
    /// Required illuminance in lux. Ignored for [`CUSTOM_ROOM`].
    pub lux: u32,
}

impl RoomLux {
    pub fn new(name: &str, lux: u32) -> Self {
        RoomLux {
            name: name.to_string(),
            lux,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.name == CUSTOM_ROOM
    }
}

/// Ordered room-type -> lux mapping. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLuxTable {
    rooms: Vec<RoomLux>,
}

impl RoomLuxTable {
    /// Builds a table, rejecting duplicate names and zero lux on regular rooms.
    pub fn new(rooms: Vec<RoomLux>) -> Result<Self, LumenError> {
        if rooms.is_empty() {
            return Err(LumenError::Config("lux table is empty".into()));
        }
        for (i, room) in rooms.iter().enumerate() {
            if room.name.trim().is_empty() {
                return Err(LumenError::Config("room type name must not be empty".into()));
            }
            if !room.is_custom() && room.lux == 0 {
                return Err(LumenError::Config(format!(
                    "room type {} must have a positive lux value",
                    room.name
                )));
            }
            if rooms[..i].iter().any(|r| r.name == room.name) {
                return Err(LumenError::Config(format!(
                    "duplicate room type: {}",
                    room.name
                )));
            }
        }
        Ok(RoomLuxTable { rooms })
    }

    /// Lux for a named room. Never consults the placeholder of [`CUSTOM_ROOM`].
    pub fn lookup(&self, room_type: &str) -> Option<u32> {
        self.rooms
            .iter()
            .find(|r| r.name == room_type && !r.is_custom())
            .map(|r| r.lux)
    }

    pub fn contains(&self, room_type: &str) -> bool {
        self.rooms.iter().any(|r| r.name == room_type)
    }

    /// Room type names in table order.
    pub fn room_types(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.name.as_str())
    }

    pub fn rooms(&self) -> &[RoomLux] {
        &self.rooms
    }
}

pub fn default_rooms() -> Vec<RoomLux> {
    vec![
        RoomLux::new("Bedroom", 150),
        RoomLux::new("Living Room", 200),
        RoomLux::new("Kitchen", 300),
        RoomLux::new("Bathroom", 250),
        RoomLux::new("Office", 400),
        RoomLux::new("Hallway", 100),
        RoomLux::new("Study", 350),
        // Placeholder; the lux value is supplied per calculation.
        RoomLux::new(CUSTOM_ROOM, 0),
    ]
}

impl Default for RoomLuxTable {
    fn default() -> Self {
        RoomLuxTable {
            rooms: default_rooms(),
        }
    }
}

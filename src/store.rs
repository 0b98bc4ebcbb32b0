use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::RwLock;

use crate::model::{Booking, Room, RoomId};

/// Collaborator failure surfaced unchanged through the engine.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

// ── Collaborator traits ──────────────────────────────────────────

/// Booking persistence. No query parameters — all filtering is engine logic.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Booking>, StoreError>;
    async fn add(&self, booking: Booking) -> Result<(), StoreError>;
}

/// Room catalog. Order of the returned catalog is unspecified; the engine
/// sorts where order matters.
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Room>, StoreError>;
}

// ── In-memory reference implementations ──────────────────────────

/// Append-only booking list behind a lock. Reference implementation and
/// test double in one.
#[derive(Default)]
pub struct MemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn get_all(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn add(&self, booking: Booking) -> Result<(), StoreError> {
        self.bookings.write().await.push(booking);
        Ok(())
    }
}

/// Concurrent id-keyed room catalog.
#[derive(Default)]
pub struct MemoryRoomStore {
    rooms: DashMap<RoomId, Room>,
}

impl MemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let store = Self::new();
        for room in rooms {
            store.insert(room);
        }
        store
    }

    /// Last insert for an id wins.
    pub fn insert(&self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[async_trait]
impl RoomStore for MemoryRoomStore {
    async fn get_all(&self) -> Result<Vec<Room>, StoreError> {
        Ok(self.rooms.iter().map(|e| e.value().clone()).collect())
    }
}

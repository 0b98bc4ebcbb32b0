//! Room availability engine for a hotel-style booking domain.
//!
//! The engine decides which room (if any) is free for a requested stay,
//! completes booking requests against the winning room, and reports dates
//! on which every room is taken. Persistence stays behind the
//! [`store::BookingStore`] / [`store::RoomStore`] traits and "today" comes
//! from an injected [`clock::Clock`], so the decision core is deterministic
//! and storage-agnostic.

pub mod clock;
pub mod engine;
pub mod model;
pub mod observability;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{Engine, EngineError};
pub use model::{Booking, DateSpan, Room, RoomId};
pub use store::{BookingStore, MemoryBookingStore, MemoryRoomStore, RoomStore, StoreError};

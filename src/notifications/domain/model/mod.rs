pub mod enums;
pub mod events;

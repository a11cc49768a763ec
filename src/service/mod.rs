pub mod matches;
pub mod player;
pub mod stats;
pub mod team;

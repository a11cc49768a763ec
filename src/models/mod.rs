pub mod matches;
pub mod player;
pub mod schema;
pub mod stats;
pub mod team;

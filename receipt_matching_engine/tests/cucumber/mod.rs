mod matching_world;
mod setups;
mod steps;

pub use matching_world::MatchingWorld;

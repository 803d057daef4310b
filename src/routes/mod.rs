pub mod entries;
pub mod links;
pub mod tags;

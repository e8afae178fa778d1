pub mod addressing;
pub mod params;

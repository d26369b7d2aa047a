pub mod badges;
pub mod calendar;
pub mod config;
pub mod streaks;

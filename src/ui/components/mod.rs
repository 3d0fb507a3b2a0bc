pub mod help;
pub mod loading;
pub mod playlist;
pub mod sidebar;
pub mod welcome;

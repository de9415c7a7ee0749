pub mod panels;
pub mod state;
pub mod theme;
pub mod markdown;

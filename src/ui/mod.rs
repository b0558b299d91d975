pub mod app;
pub mod layout;
pub mod components;

// Re-export commonly used items
pub use app::App;
pub use layout::draw;

pub mod app;
pub mod camera;
pub mod config;
pub mod errors;
pub mod layout;
pub mod lights;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod palette;
pub mod scene;
pub mod shading;
pub mod ui;
pub mod wrap;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState};
pub use config::AppConfig;
pub use layout::{LayoutParams, TextBlock};
pub use model::{Line, Word, WordColor};
pub use wrap::{wrap_words, LayoutError};

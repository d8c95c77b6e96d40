// ==========================================
// Reorder Forecast - application layer
// ==========================================

pub mod state;

pub use state::SessionState;

// ── Layout state storage ──

mod layout;

pub use layout::LayoutStore;

pub mod combos;
pub mod defs;
pub mod loader;

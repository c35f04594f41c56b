//! High-level device operations, grouped by concern. Each file adds an
//! `impl Device<T>` block; nothing is exported from here directly.

mod card;
mod control;
mod diagnostics;
mod settings;

//! This module provides the terminal-facing side of the console: the
//! `surface` module that executes one command end to end, and the `table`
//! module that renders voyages, vessels and unit types as aligned text
//! tables.

mod surface;
mod table;

pub(crate) use surface::{ConsoleError, ConsoleSurface};

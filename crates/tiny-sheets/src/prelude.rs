//! Prelude module - common imports for tiny-sheets users
//!
//! ```rust
//! use tiny_sheets::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellError,
    // Evaluation
    Evaluator,
    FormulaState,
    // The cell store
    Grid,
    // Load/print surface
    LoadError,
    TsvReader,
    TsvWriter,
};

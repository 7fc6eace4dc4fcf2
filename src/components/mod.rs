//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render individual pieces of the page while pages own the
//! fetch orchestration and state wiring.

pub mod user_row;

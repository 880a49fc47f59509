//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: what a panel renders from
//! - **Intent**: key presses and fetch results
//! - **Reducer**: pure `(State, Intent) -> State`; persistence and network
//!   calls happen in `App` around the dispatch

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

// NOTE: podium Architecture Rationale
//
// Why an owned Navigator value (not ambient global state)?
// - All mutation funnels through one guarded transition path
// - The state machine is testable with injected clocks, no terminal needed
// - Only the `present` handler holds the composition root
//
// Why ViewModel-first rendering?
// - Presenters are pure functions from state to plain data
// - Each render facet (section, sidebar, controls, progress, indicator)
//   derives from the current section alone, never from another facet
// - The ratatui layer maps data to widgets and makes no decisions
//
// Why a settle deadline (not an animation-complete signal)?
// - Terminal redraws have no completion event to tie a guard to
// - A fixed Instant comparison absorbs key-repeat without a timer thread
// - Trade-off: a very slow redraw could outlive the window; acceptable
//   for a viewer that redraws in microseconds

mod args;
mod commands;
mod handlers;
pub mod input;
pub mod presentation;
pub mod ui;

pub use args::{Cli, Commands};
pub use commands::run;

//! Interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (Page, PageStack, Action, Transition)
//! - `focus`, `menu`, `uuid_tool`, `hash_tool`, `color_tool`: per-page sessions
//! - `update`: the navigation controller (`App::dispatch`)
//! - `view`: pure rendering
//! - `run`: effects (terminal, clipboard, editor)

pub mod color_tool;
pub mod focus;
pub mod hash_tool;
pub mod menu;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod uuid_tool;
pub mod view;

pub use run::run;

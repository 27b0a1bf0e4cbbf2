//! The pagination state machine and its presentation layer.
//!
//! A [`PaginationController`] owns the assembled [`Book`](crate::types::Book)
//! and a cursor pointing at the left page of the visible two-page spread.
//! Input events map to navigation commands via [`Command::from_event`], and
//! rendering is pull-based: [`PaginationController::render`] produces a [`SpreadView`]
//! describing exactly what the host should show.

mod controller;
mod input;
mod view;

pub use controller::{PaginationController, Spread};
pub use input::{Command, InputEvent, SWIPE_THRESHOLD_PX};
pub use view::{RenderedPage, SpreadView, Theme};

//! Input mapping - discrete host events to navigation commands

/// Minimum horizontal travel, in pixels, before a swipe turns the page
pub const SWIPE_THRESHOLD_PX: i32 = 40;

/// A discrete input event from the host environment.
///
/// Front ends translate whatever they receive (clicks, key presses, touch
/// gestures, mouse drags) into these before asking for a command, so every
/// front end shares one vocabulary and the mapping stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// "next" control activated
    NextControl,
    /// "previous" control activated
    PreviousControl,
    /// Right-arrow key
    ArrowRight,
    /// Left-arrow key
    ArrowLeft,
    /// Horizontal swipe finished with the given signed displacement in pixels
    Swipe { dx: i32 },
    /// A contents entry was activated
    ContentsEntry { target: usize },
    /// "start" control activated
    StartControl,
}

/// A navigation intent, ready for [`PaginationController::apply`](super::PaginationController::apply)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Dismiss the start screen and build the book (host-owned)
    Start,
    /// Advance one spread
    Next,
    /// Go back one spread
    Previous,
    /// Jump so the given absolute page index is visible
    JumpTo(isize),
}

impl Command {
    /// Map an input event to its command, if it produces one.
    ///
    /// A swipe shorter than the threshold maps to nothing.
    pub fn from_event(event: InputEvent) -> Option<Self> {
        match event {
            InputEvent::NextControl | InputEvent::ArrowRight => Some(Command::Next),
            InputEvent::PreviousControl | InputEvent::ArrowLeft => Some(Command::Previous),
            InputEvent::Swipe { dx } if dx < -SWIPE_THRESHOLD_PX => Some(Command::Next),
            InputEvent::Swipe { dx } if dx > SWIPE_THRESHOLD_PX => Some(Command::Previous),
            InputEvent::Swipe { .. } => None,
            InputEvent::ContentsEntry { target } => Some(Command::JumpTo(target as isize)),
            InputEvent::StartControl => Some(Command::Start),
        }
    }
}

//! The party game: mode sequencing, host events and render views.
//!
//! A presentation layer creates a [`Game`] with [`GameBuilder`], feeds it
//! [`HostEvent`]s (or calls the matching methods directly) and renders the
//! [`GameView`] after each one.

mod builder;
mod events;
mod sequencer;
mod view;

pub use builder::GameBuilder;
pub use events::HostEvent;
pub use sequencer::Game;
pub use view::{GameView, ModeIntro, Notice, NoticeKind, ScoreBarEntry};

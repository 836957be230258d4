//! Make build-step wiring.
//!
//! Maintains the user-editable state of a make invocation inside a build
//! pipeline: which targets to build, an optional override of the make
//! command, free-form extra arguments, and a clean flag. A summary watcher
//! recomputes the human-readable command line whenever the surrounding
//! project state changes.

pub mod events;
pub mod step;
pub mod summary;
pub mod toolchain;

pub use events::{BuildEvent, EventBus};
pub use step::{MakeStep, MakeStepRecord};
pub use summary::{ProjectState, SummaryWatcher, summarize};

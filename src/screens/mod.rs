//! Screen controllers for the application.
//!
//! Each screen owns its view state and implements `Screen`. The app keeps
//! one instance of each alive for the whole session and routes events to
//! whichever is current:
//!
//! ```text
//! App ── match current ─┬─ Home     -> HomeScreen
//!                       ├─ Create   -> CreateScreen
//!                       └─ Practice -> PracticeScreen
//! ```
//!
//! Screens never switch views themselves; they return a `ScreenAction`.

pub mod create;
pub mod home;
pub mod practice;
pub mod screen_trait;

pub use create::CreateScreen;
pub use home::HomeScreen;
pub use practice::PracticeScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};

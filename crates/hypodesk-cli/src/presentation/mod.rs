//! # Presentation Layer
//!
//! Console output follows a one-way flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/` hold raw data and derive `Serialize`; JSON output is the
//!   full view model wrapped in a `CommandResultViewModel` envelope.
//! * `presenters/` turn runtime and engine values into view models and decide
//!   badges and suggestions.
//! * `views/` implement `fmt::Display` over a view model and own layout,
//!   colours and formatting.
//! * `formatters/` are small string helpers shared by the views and the
//!   dashboard.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};

//! Viewer application.
//!
//! | Sub-module     | Responsibility |
//! | -------------- | -------------- |
//! | [`viewer_app`] | [`ViewerApp`] (eframe): loading state, clock wiring, panel layout |
//! | [`charts`]     | Windowed metric charts and the pitch/roll path trace |
//! | [`rocket`]     | Rocket wireframe rotated by the current orientation |
//! | [`run`]        | Top-level [`run_viewer()`] entry point |

pub mod charts;
pub mod rocket;
mod run;
mod viewer_app;

pub use run::run_viewer;
pub use viewer_app::ViewerApp;

//! Everything that doesn't touch the DOM: the request contract, the mock backend and
//! the state machines the pages drive.

pub mod api;
pub mod blog;
pub mod clock;
pub mod config;
pub mod controller;
pub mod forms;
pub mod requests;
pub mod seo;
pub mod status;
pub mod validation;

pub use api::*;
pub use blog::*;
pub use clock::*;
pub use config::*;
pub use controller::*;
pub use requests::*;
pub use seo::*;
pub use status::*;
pub use validation::*;

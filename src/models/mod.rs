pub mod appointment;
pub mod client;
pub mod diagnosis;
pub mod doctor;
pub mod enums;
pub mod filters;
pub mod observation;
pub mod prescription;
pub mod progress;
pub mod recommendation;
pub mod symptom;
pub mod treatment;

pub use appointment::*;
pub use client::*;
pub use diagnosis::*;
pub use doctor::*;
pub use enums::*;
pub use filters::*;
pub use observation::*;
pub use prescription::*;
pub use progress::*;
pub use recommendation::*;
pub use symptom::*;
pub use treatment::*;

/// `"{first} {last}"` with surrounding whitespace removed.
pub(crate) fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))
        .trim()
        .to_string()
}

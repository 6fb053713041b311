pub mod moodle;

pub use moodle::{format_fraction, render};

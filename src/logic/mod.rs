//! Core non-UI logic: the search orchestrator and the result aggregator.

pub mod aggregate;
pub mod orchestrator;

pub use aggregate::{ReadModel, compute, compute_from};
pub use orchestrator::{
    go_home, initial_load, load_more, parse_location, start_image_search, start_location_search,
    submit_image_form, submit_location_form,
};

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filtering, chart rendering and event dispatch for the county crime
//! dashboard.
//!
//! A redraw cycle is: [`filter`] subsets the loaded [`Dataset`] for the
//! current state, then [`charts`] turns the subset into figures.
//! [`dispatch::Dashboard`] ties both to UI events, using [`selection`] to
//! update the county selection.
//!
//! [`Dataset`]: hu_crime_map_dataset::Dataset

pub mod charts;
pub mod dispatch;
pub mod filter;
pub mod selection;

pub use dispatch::Dashboard;

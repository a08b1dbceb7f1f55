// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! VR front-end for a molecular visualizer.
//!
//! molvr tracks a headset and its hand controllers through a [`VrRuntime`],
//! shows the host application's 2D GUI as a head-locked panel, and turns
//! controller lasers into the mouse and command events the host already
//! understands.
//!
//! # Key entry points
//!
//! - [`context::VrContext`] - the owned VR session driven once per frame
//! - [`menu::Menu`] - the GUI panel and its ray intersection
//! - [`laser::arbitrate`] - routes every controller laser to the active
//!   target
//! - [`options::VrOptions`] - panel, laser and pad configuration
//!
//! # Frame flow
//!
//! The host calls [`context::VrContext::frame_start`] to latch poses, then
//! [`context::VrContext::handle_input`] with its own
//! [`input::InputHandlers`]. At most one laser target (menu or scene
//! picker) is active at a time; the menu wins when both could be. The
//! draw pass afterwards only reads state.
//!
//! [`VrRuntime`]: runtime::VrRuntime

pub mod context;
pub mod controller;
pub mod error;
pub mod input;
pub mod laser;
pub mod math;
pub mod menu;
pub mod options;
pub mod picker;
pub mod runtime;

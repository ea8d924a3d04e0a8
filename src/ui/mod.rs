//! User-facing output.
//!
//! rc-gate runs unattended in release pipelines, so there are no prompts:
//! everything here is status reporting on stdout / stderr.

pub mod formatter;

pub use formatter::{
    display_error, display_status, display_success, display_tag_list, display_warning,
    format_tag_list,
};

//! Client side of the luxury asset API: HTTP client, submission form
//! coercions and text rendering used by the `luxury` CLI.

pub mod client;
pub mod form;
pub mod render;

pub use client::{AssetsClient, ClientError};
pub use form::SubmissionForm;
pub use render::{render_asset_card, render_asset_list};

// SPDX-License-Identifier: MPL-2.0
//! Gallery controllers.
//!
//! - [`pagination`]: query/page/result state machine
//! - [`selection`]: preview overlay selection
//! - [`status`]: fetch status and the render snapshot
//! - [`dispatch`]: runs fetch requests against the search port

pub mod dispatch;
pub mod pagination;
pub mod selection;
pub mod status;

pub use dispatch::{dispatch, FetchOutcome};
pub use pagination::{FetchRequest, SearchPaginationController, Settlement};
pub use selection::SelectionController;
pub use status::{FetchStatus, GallerySnapshot};

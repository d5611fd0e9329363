//! This module provides the voyage controllers: the creation workflow that
//! takes a draft from first keystroke to a confirmed backend voyage, and the
//! board that lists and deletes stored voyages. Both sit on the same
//! [`VoyageGateway`] and share one voyages-changed broadcast.

mod board;
mod draft;
mod gateway;
mod reference;
mod signal;
mod workflow;

pub use board::VoyageBoard;
pub use draft::DraftField;
pub use gateway::{DeleteError, FetchError, RestGateway, VoyageGateway};
pub use signal::{Notice, NoticeLevel, VoyagesChanged};
pub use workflow::{CreationWorkflow, SubmitError, SubmitOutcome};

#[cfg(test)]
mod tests;

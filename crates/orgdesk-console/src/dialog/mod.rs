//! Dialog controllers.
//!
//! Every dialog is a two-state machine: `Closed` or `Open(draft)`. Opening
//! always replaces the draft, confirming or cancelling always closes it.
//! Confirm validates locally and only then calls into a store, so a
//! rejected confirm leaves both the store and the dialog untouched.

mod change_org;
mod create;
mod delete;
mod draft;
mod edit;
mod sso_config;

pub use change_org::ChangeOrgDialog;
pub use create::CreateOrgDialog;
pub use delete::DeleteOrgDialog;
pub use draft::{NumberInput, OrgField, OrganizationDraft};
pub use edit::{EditDraft, EditProfileDialog};
pub use sso_config::{SsoConfigDialog, SsoDialogMode, SsoDraft, SsoField};

use std::mem;

use crate::error::ConsoleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState<D> {
    Closed,
    Open(D),
}

impl<D> Default for DialogState<D> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<D> DialogState<D> {
    /// Open with `draft`, discarding whatever was there.
    pub fn open(&mut self, draft: D) {
        *self = Self::Open(draft);
    }

    /// Close and hand back the draft, if any.
    pub fn close(&mut self) -> Option<D> {
        match mem::replace(self, Self::Closed) {
            Self::Open(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Open(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Result<&mut D, ConsoleError> {
        match self {
            Self::Open(draft) => Ok(draft),
            Self::Closed => Err(ConsoleError::DialogClosed),
        }
    }

    pub(crate) fn require_draft(&self) -> Result<&D, ConsoleError> {
        self.draft().ok_or(ConsoleError::DialogClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_replaces_draft() {
        let mut state = DialogState::default();
        state.open(1);
        *state.draft_mut().unwrap() = 2;
        state.open(1);
        assert_eq!(state.draft(), Some(&1));
    }

    #[test]
    fn close_returns_draft_once() {
        let mut state = DialogState::Open("draft");
        assert_eq!(state.close(), Some("draft"));
        assert_eq!(state.close(), None);
        assert!(!state.is_open());
        assert_eq!(state.draft_mut(), Err(ConsoleError::DialogClosed));
    }
}

//! Credential form state

use std::fmt;

use serde::Serialize;
use tracker_hub_backend::Connection;

use super::registry::RegistryView;

/// Text typed into the credential form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub domain: String,
    pub account: String,
    pub token: String,
}

impl CredentialInput {
    pub fn new(
        domain: impl Into<String>,
        account: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            account: account.into(),
            token: token.into(),
        }
    }

    /// Names of the fields that are blank after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("domain", &self.domain),
            ("account", &self.account),
            ("token", &self.token),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Trimmed credential triple, `None` while any field is blank.
    pub fn to_connection(&self) -> Option<Connection> {
        self.is_complete().then(|| {
            Connection::new(self.domain.trim(), self.account.trim(), self.token.trim())
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("domain", &self.domain)
            .field("account", &self.account)
            .field("token", &"***")
            .finish()
    }
}

/// Where a form submission stands.
///
/// `Idle → Submitting → Success | Rejected | Unavailable`, or `Invalid` when
/// local validation stopped it before any request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    /// Verified and stored; `message` is the backend's text, verbatim
    Success { message: String },
    /// The backend refused the credentials
    Rejected { message: String },
    /// No usable answer from the backend
    Unavailable { reason: String },
    /// A field was blank
    Invalid { reason: String },
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Text to show next to the form, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Success { message } | Self::Rejected { message } => Some(message),
            Self::Unavailable { reason } | Self::Invalid { reason } => Some(reason),
        }
    }
}

/// Result of one submission.
///
/// `input` is what the form fields must show afterwards (cleared on success,
/// retained otherwise). `registry` is only present after a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub state: FormState,
    pub input: CredentialInput,
    pub registry: Option<RegistryView>,
}

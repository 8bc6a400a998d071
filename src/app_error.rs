//! Structured application error.
//!
//! An `AppError` carries a stable id that doubles as its localization key.
//! The user-facing `message` starts out equal to the id and is rendered by
//! whatever translator is available: the process-wide one at construction,
//! a request-specific one later via `translate`.
//!
//! Wire form (JSON):
//!   id, message, detailed_error          always present
//!   request_id                           omitted when empty
//!   status_code                          omitted when zero
//!   is_oauth                             omitted when false
//! The wrapped cause is folded into `detailed_error` on the way out.  The
//! origin label, params, and cause itself never cross the wire.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::constants::{MAX_ERROR_LENGTH, NO_TRANSLATION};
use crate::errors::{CodecError, ID_DECODE_JSON, STATUS_INTERNAL_SERVER_ERROR};
use crate::text::truncate_bytes;
use crate::translate::{self, Params, Translator, TranslatorSlot};

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

// Decoding mirrors what peers actually send: any field may be missing or
// `null`, and status codes are not range-checked by the sender.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppError {
    /// Stable machine-readable id; also the translation key.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Text for the end user, without debugging information.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Developer-facing detail.  Not localized.
    #[serde(deserialize_with = "null_as_default")]
    pub detailed_error: String,
    /// Request correlation id, mirrored from the response header.
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    /// HTTP status code, 0 when unset.  Out-of-range values saturate.
    #[serde(deserialize_with = "saturating_status")]
    pub status_code: u16,
    /// Where it happened, usually `Type::method`.
    #[serde(skip)]
    pub origin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_oauth: bool,
    #[serde(skip)]
    params: Option<Params>,
    #[serde(skip)]
    wrapped: Option<Cause>,
}

impl AppError {
    /// Build an error and render it with the process-wide translator.
    pub fn new(
        origin: impl Into<String>,
        id: impl Into<String>,
        params: Option<Params>,
        details: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::new_in(translate::global(), origin, id, params, details, status_code)
    }

    /// Build an error and render it with the translator held by `slot`.
    pub fn new_in(
        slot: &TranslatorSlot,
        origin: impl Into<String>,
        id: impl Into<String>,
        params: Option<Params>,
        details: impl Into<String>,
        status_code: u16,
    ) -> Self {
        let id = id.into();
        let mut err = AppError {
            message: id.clone(),
            id,
            detailed_error: details.into(),
            request_id: String::new(),
            status_code,
            origin: origin.into(),
            is_oauth: false,
            params,
            wrapped: None,
        };
        err.translate(slot.get());
        err
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_oauth(mut self, is_oauth: bool) -> Self {
        self.is_oauth = is_oauth;
        self
    }

    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    /// Re-render `message`.  `None` resets it to the id.
    pub fn translate(&mut self, translator: Option<&dyn Translator>) {
        self.message = self.system_message(translator);
    }

    /// Render the message without storing it, e.g. for server logs in the
    /// server locale while the stored message stays in the user's.
    pub fn system_message(&self, translator: Option<&dyn Translator>) -> String {
        match translator {
            None => self.id.clone(),
            Some(t) => translate::render(t, &self.id, self.params.as_ref()),
        }
    }

    /// Attach `cause` as the underlying error, replacing any previous one.
    pub fn wrap<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.wrapped = Some(Arc::new(cause));
        self
    }

    /// The wrapped cause, one level down.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.wrapped.as_deref()
    }

    /// Borrowed wire projection with the cause folded into the detail.
    pub fn to_wire(&self) -> WireAppError<'_> {
        let detailed_error = match &self.wrapped {
            None => Cow::Borrowed(self.detailed_error.as_str()),
            Some(cause) if self.detailed_error.is_empty() => Cow::Owned(cause.to_string()),
            Some(cause) => Cow::Owned(format!("{}, {}", self.detailed_error, cause)),
        };
        WireAppError {
            id: &self.id,
            message: &self.message,
            detailed_error,
            request_id: &self.request_id,
            status_code: self.status_code,
            is_oauth: self.is_oauth,
        }
    }

    /// Serialize the wire projection.  `self` is left untouched.
    pub fn to_json(&self) -> String {
        // a struct of plain strings and integers always serializes
        serde_json::to_string(&self.to_wire()).unwrap_or_default()
    }

    /// Decode an error received over the wire.
    ///
    /// Only the first JSON value is read; anything after it is ignored.
    /// Never fails: a body that does not parse produces an error describing
    /// the failure, with the parse error wrapped.  A decoded error keeps the
    /// message it was sent with.
    pub fn from_json(data: &[u8]) -> AppError {
        let first = serde_json::Deserializer::from_slice(data)
            .into_iter::<AppError>()
            .next()
            // empty body: let the plain parser produce the EOF error
            .unwrap_or_else(|| serde_json::from_slice::<AppError>(data));
        match first {
            Ok(err) => err,
            Err(parse) => {
                let body = String::from_utf8_lossy(data);
                warn!(error = %parse, "undecodable app error body");
                AppError::new(
                    "AppError::from_json",
                    ID_DECODE_JSON,
                    None,
                    format!("body: {}", body),
                    STATUS_INTERNAL_SERVER_ERROR,
                )
                .wrap(parse)
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.origin.len() + self.message.len() + 2);
        out.push_str(&self.origin);
        out.push_str(": ");

        let show_message = self.message != NO_TRANSLATION;
        if show_message {
            out.push_str(&self.message);
        }

        if !self.detailed_error.is_empty() {
            if show_message {
                out.push_str(", ");
            }
            out.push_str(&self.detailed_error);
        }

        if let Some(cause) = &self.wrapped {
            out.push_str(", ");
            out.push_str(&cause.to_string());
        }

        if out.len() > MAX_ERROR_LENGTH {
            write!(f, "{}...", truncate_bytes(&out, MAX_ERROR_LENGTH))
        } else {
            f.write_str(&out)
        }
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.wrapped
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        AppError::new("ColumnCodec", err.error_id(), None, "", err.status_code()).wrap(err)
    }
}

/// JSON shape of an `AppError` on the wire.
#[derive(Debug, Serialize)]
pub struct WireAppError<'a> {
    pub id: &'a str,
    pub message: &'a str,
    pub detailed_error: Cow<'a, str>,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub request_id: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    pub status_code: u16,
    #[serde(skip_serializing_if = "is_false")]
    pub is_oauth: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn saturating_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let code = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    Ok(code.clamp(0, i64::from(u16::MAX)) as u16)
}

fn is_zero(v: &u16) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !*v
}

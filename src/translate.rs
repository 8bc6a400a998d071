//! Translation hook used to render `AppError` messages.
//!
//! Localization catalogs live outside this crate.  The host hands over a
//! `Translator` once at startup; the first install wins and later installs
//! are dropped without error.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

/// Interpolation parameters for a message id.
pub type Params = HashMap<String, serde_json::Value>;

/// Renders a message id (plus optional params) into user-facing text.
pub trait Translator: Send + Sync {
    fn translate(&self, id: &str, params: Option<&Params>) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, Option<&Params>) -> String + Send + Sync,
{
    fn translate(&self, id: &str, params: Option<&Params>) -> String {
        self(id, params)
    }
}

/// Install-once holder for a translator.
///
/// Concurrent first-time installs are serialized by the cell; exactly one
/// succeeds.
#[derive(Default)]
pub struct TranslatorSlot {
    cell: OnceCell<Arc<dyn Translator>>,
}

impl TranslatorSlot {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Install `translator` unless one is already present.
    ///
    /// Returns whether this call won.  Callers are free to ignore it.
    pub fn install(&self, translator: Arc<dyn Translator>) -> bool {
        let installed = self.cell.set(translator).is_ok();
        if installed {
            debug!("translator installed");
        } else {
            debug!("translator already installed, ignoring");
        }
        installed
    }

    pub fn get(&self) -> Option<&dyn Translator> {
        self.cell.get().map(|t| &**t)
    }

    pub fn is_installed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for TranslatorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorSlot")
            .field("installed", &self.is_installed())
            .finish()
    }
}

static GLOBAL: TranslatorSlot = TranslatorSlot::new();

/// The process-wide slot consulted by `AppError::new`.
pub fn global() -> &'static TranslatorSlot {
    &GLOBAL
}

/// Install the process-wide translator.  Only the first call has effect.
pub fn install_translator<T: Translator + 'static>(translator: T) -> bool {
    GLOBAL.install(Arc::new(translator))
}

/// Run `translator`, falling back to `id` when it produces nothing.
pub(crate) fn render(translator: &dyn Translator, id: &str, params: Option<&Params>) -> String {
    let params = params.filter(|p| !p.is_empty());
    let text = translator.translate(id, params);
    if text.is_empty() {
        id.to_string()
    } else {
        text
    }
}

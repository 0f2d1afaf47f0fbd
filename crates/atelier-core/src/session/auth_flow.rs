//! Sign-in/sign-up orchestration and the busy-flag invariant.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use atelier_types::AuthOutcome;
use tracing::debug;

use super::{AuthProvider, SessionReconciler};

/// Holds the busy flag for the duration of one flow call.
///
/// Drop runs on every exit path, `?` and panics included, so the flag can
/// never stay stuck after a partial failure.
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    fn hold(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self {
            flag: Arc::clone(flag),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Public surface of the authentication flow: `sign_in`, `sign_up`, and
/// the observable busy flag.
///
/// Each call sequences provider -> reconciler -> navigation. Credentials
/// pass through verbatim; validation belongs to the provider. Re-entrancy
/// is not guarded: callers keep at most one call in flight per instance,
/// typically by disabling the submitting control while `is_loading()`.
pub struct AuthFlow {
    provider: Arc<dyn AuthProvider>,
    reconciler: SessionReconciler,
    loading: Arc<AtomicBool>,
}

impl AuthFlow {
    pub fn new(provider: Arc<dyn AuthProvider>, reconciler: SessionReconciler) -> Self {
        Self {
            provider,
            reconciler,
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True only while one `sign_in`/`sign_up` call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Exchanges credentials for a session and, on success, reconciles
    /// the post-login destination before returning.
    ///
    /// A rejected credential comes back as the provider's outcome value,
    /// untouched; no collaborator beyond the provider is invoked for it.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let _busy = BusyGuard::hold(&self.loading);
        let outcome = self.provider.sign_in(email, password).await?;
        self.finish(outcome).await
    }

    /// Same contract as [`sign_in`](Self::sign_in), for account creation.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let _busy = BusyGuard::hold(&self.loading);
        let outcome = self.provider.sign_up(email, password).await?;
        self.finish(outcome).await
    }

    async fn finish(&self, outcome: AuthOutcome) -> Result<AuthOutcome> {
        if outcome.success {
            self.reconciler.reconcile_and_navigate().await?;
        } else {
            debug!(error = ?outcome.error, "credential exchange rejected");
        }
        Ok(outcome)
    }
}

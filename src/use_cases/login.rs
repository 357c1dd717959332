use crate::domain::{Page, PlacesApi, Route, SessionStore};
use crate::interface_adapters::presenters::ids;
use crate::use_cases::types::{LoginForm, SubmitOutcome};

pub const LOGIN_FAILED: &str = "login failed";
pub const SESSION_SAVE_FAILED: &str = "Unable to save your session. Please try again.";
const SUBMIT_LABEL: &str = "Login";
const SUBMIT_BUSY_LABEL: &str = "Logging in...";

// Login form controller with injected dependencies.
pub struct LoginController<A, S> {
    pub api: A,
    pub session: S,
    pub session_ttl_seconds: u64,
}

impl<A, S> LoginController<A, S>
where
    A: PlacesApi,
    S: SessionStore,
{
    #[tracing::instrument(name = "login_submit", skip_all)]
    pub async fn on_submit<P: Page>(&self, page: &mut P, form: LoginForm) -> SubmitOutcome {
        page.set_text(ids::ERROR_MESSAGE, "");

        let email = match form.checked_email() {
            Ok(email) => email,
            Err(err) => {
                tracing::debug!(error = %err, "login form rejected.");
                page.set_text(ids::ERROR_MESSAGE, &err.to_string());
                return SubmitOutcome::Invalid;
            }
        };

        page.set_disabled(ids::LOGIN_SUBMIT, true);
        page.set_text(ids::LOGIN_SUBMIT, SUBMIT_BUSY_LABEL);

        let outcome = self.request(page, &email, &form.password).await;

        // The control is usable again whatever happened.
        page.set_disabled(ids::LOGIN_SUBMIT, false);
        page.set_text(ids::LOGIN_SUBMIT, SUBMIT_LABEL);
        outcome
    }

    async fn request<P: Page>(&self, page: &mut P, email: &str, password: &str) -> SubmitOutcome {
        let token = match self.api.login(email, password).await {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "login failed.");
                page.set_text(ids::ERROR_MESSAGE, &err.user_message(LOGIN_FAILED));
                return SubmitOutcome::Failed;
            }
        };

        // Navigate only once the credential is persisted.
        if let Err(err) = self
            .session
            .set_token(token, self.session_ttl_seconds)
            .await
        {
            tracing::error!(error = %err, "failed to persist session.");
            page.set_text(ids::ERROR_MESSAGE, SESSION_SAVE_FAILED);
            return SubmitOutcome::Failed;
        }

        tracing::info!("login succeeded.");
        page.navigate(Route::Index);
        SubmitOutcome::Submitted
    }
}

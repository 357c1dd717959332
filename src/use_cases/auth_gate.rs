use crate::domain::{Page, SessionStore, SessionToken};
use crate::interface_adapters::presenters::{ids, render_nav_control};

// Login state check shared by every page controller.
#[derive(Clone)]
pub struct AuthGate<S> {
    pub session: S,
}

impl<S> AuthGate<S>
where
    S: SessionStore,
{
    /// A store failure is treated as "not logged in".
    pub async fn current_token(&self) -> Option<SessionToken> {
        match self.session.get_token().await {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read session; continuing anonymously");
                None
            }
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current_token().await.is_some()
    }

    /// Mount the login/logout control and hand the token back to the caller.
    pub async fn render_nav_control<P: Page>(&self, page: &mut P) -> Option<SessionToken> {
        let token = self.current_token().await;
        page.mount(ids::LOGIN_LINK, vec![render_nav_control(token.is_some())]);
        token
    }

    #[tracing::instrument(name = "logout", skip_all)]
    pub async fn logout<P: Page>(&self, page: &mut P) {
        if let Err(err) = self.session.clear_token().await {
            tracing::error!(error = %err, "failed to clear session.");
        } else {
            tracing::info!("session cleared.");
        }
        page.reload();
    }
}

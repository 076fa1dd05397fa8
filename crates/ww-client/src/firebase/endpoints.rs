/// Where the Firebase REST APIs live, plus the project's web API key.
#[derive(Clone)]
pub struct FirebaseEndpoints {
    pub api_key: String,
    /// Identity Toolkit base, e.g. `https://identitytoolkit.googleapis.com/v1`
    pub identity_base_url: String,
    /// Secure Token base, e.g. `https://securetoken.googleapis.com/v1`
    pub token_base_url: String,
}

impl FirebaseEndpoints {
    pub fn new(
        api_key: impl Into<String>,
        identity_base_url: &str,
        token_base_url: &str,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            identity_base_url: identity_base_url.trim_end_matches('/').to_string(),
            token_base_url: token_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Both services served from one base URL (tests, emulators).
    pub fn single_host(api_key: impl Into<String>, base_url: &str) -> Self {
        Self::new(api_key, base_url, base_url)
    }

    pub fn sign_in_url(&self) -> String {
        self.identity_url("accounts:signInWithPassword")
    }

    pub fn sign_up_url(&self) -> String {
        self.identity_url("accounts:signUp")
    }

    pub fn update_url(&self) -> String {
        self.identity_url("accounts:update")
    }

    pub fn refresh_url(&self) -> String {
        format!("{}/token?key={}", self.token_base_url, self.api_key)
    }

    fn identity_url(&self, method: &str) -> String {
        format!("{}/{method}?key={}", self.identity_base_url, self.api_key)
    }
}

impl std::fmt::Debug for FirebaseEndpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseEndpoints")
            .field("api_key", &"<redacted>")
            .field("identity_base_url", &self.identity_base_url)
            .field("token_base_url", &self.token_base_url)
            .finish()
    }
}

use secrecy::SecretString;

/// Process-wide configuration resolved once at startup.
///
/// The service key is server-only: it must come from a configuration channel
/// that is never bundled into client-executed code, and it never leaves this
/// struct except through the privileged admin client.
#[derive(Clone)]
pub struct GlobalArgs {
    pub backend_url: String,
    pub anon_key: Option<String>,
    pub service_key: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(backend_url: String, anon_key: Option<String>, service_key: SecretString) -> Self {
        Self {
            backend_url,
            anon_key,
            service_key,
        }
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("backend_url", &self.backend_url)
            .field("anon_key", &self.anon_key)
            .field("service_key", &"***")
            .finish()
    }
}

/// Credentials used to authenticate against a remote host.
///
/// A plain holder: every field is independently settable and readable,
/// nothing is validated or derived.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthenticationInfo {
    username: Option<String>,
    password: Option<String>,
    passphrase: Option<String>,
    private_key: Option<String>,
}

impl AuthenticationInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    /// Passphrase protecting the private key.
    pub fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref()
    }

    pub fn set_passphrase(&mut self, passphrase: impl Into<String>) {
        self.passphrase = Some(passphrase.into());
    }

    /// Reference to the private key, usually a path such as `~/.ssh/id_ed25519`.
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    pub fn set_private_key(&mut self, private_key: impl Into<String>) {
        self.private_key = Some(private_key.into());
    }
}

impl std::fmt::Debug for AuthenticationInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("AuthenticationInfo")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("passphrase", &redact(&self.passphrase))
            .field("private_key", &self.private_key)
            .finish()
    }
}

//! This gives the required structures to authorize the requests against the Vimeo API as specified in [the documentation](https://developer.vimeo.com/api/authentication).

/// The different kind of credentials used for authorization
#[derive(Clone, Debug)]
pub enum Credentials {
    AccessToken {
        access_token: String,
    },
    Client {
        client_id: String,
        client_secret: String,
    },
}

impl Credentials {
    /// Creates a credential based on the environment variables
    ///
    /// When `VIMEO_ACCESS_TOKEN` is set, a `Some(Credentials::AccessToken)` will be created.
    ///
    /// When `VIMEO_CLIENT_ID` and `VIMEO_CLIENT_SECRET` are set, a `Some(Credentials::Client)` will be created.
    ///
    /// If none are set, `None` is returned.
    ///
    /// ```rust
    /// use vimeo::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(Credentials::AccessToken { .. }) => println!("uses an access token"),
    ///     Some(Credentials::Client { .. }) => println!("uses the client id and secret"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        if let Ok(access_token) = std::env::var("VIMEO_ACCESS_TOKEN") {
            Some(Self::AccessToken { access_token })
        } else if let (Ok(client_id), Ok(client_secret)) = (
            std::env::var("VIMEO_CLIENT_ID"),
            std::env::var("VIMEO_CLIENT_SECRET"),
        ) {
            Some(Self::Client {
                client_id,
                client_secret,
            })
        } else {
            None
        }
    }
}

impl Credentials {
    pub fn access_token<S: Into<String>>(access_token: S) -> Self {
        Self::AccessToken {
            access_token: access_token.into(),
        }
    }

    pub fn client<I: Into<String>, S: Into<String>>(client_id: I, client_secret: S) -> Self {
        Self::Client {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub(crate) fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::AccessToken { access_token } => req.bearer_auth(access_token),
            Self::Client {
                client_id,
                client_secret,
            } => req.basic_auth(client_id, Some(client_secret)),
        }
    }
}

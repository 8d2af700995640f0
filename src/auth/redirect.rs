//! The WCA redirect: building the authorize link and parsing what comes back.

use std::fmt;

/// Query parameter carrying the one-time authorization code.
pub const CODE_PARAM: &str = "code";

/// Query parameter the identity provider sets when the user declines.
const ERROR_PARAM: &str = "error";

/// One-time code issued by the WCA after user consent.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationCode(String);

impl AuthorizationCode {
    /// Wrap a code, rejecting blank values.
    pub fn parse(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            None
        } else {
            Some(Self(code))
        }
    }

    /// The raw code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorizationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationCode(<redacted>)")
    }
}

/// Decoded query parameters of the redirect back from the WCA.
///
/// The full parameter set is kept because the token exchange posts all of
/// it, not just the code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedirectParams {
    params: Vec<(String, String)>,
}

impl RedirectParams {
    /// Parse a full redirect URL, a `?query`, or a bare `key=value&...` string.
    ///
    /// Anything after `#` is ignored. Pairs without `=` get an empty value;
    /// pairs with an empty key are dropped.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = input.split('#').next().unwrap_or_default();
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None if input.contains("://") => "",
            None => input,
        };

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = decode_component(key);
                if key.is_empty() {
                    None
                } else {
                    Some((key, decode_component(value)))
                }
            })
            .collect();

        Self { params }
    }

    /// Look up a parameter; the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The authorization code, if the redirect carries a non-blank one.
    pub fn code(&self) -> Option<AuthorizationCode> {
        self.get(CODE_PARAM).and_then(AuthorizationCode::parse)
    }

    /// The provider's error value, if the user declined.
    pub fn error(&self) -> Option<&str> {
        self.get(ERROR_PARAM).filter(|e| !e.is_empty())
    }

    /// Whether no parameters were found.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The parameters as a JSON object, the body of the token exchange.
    pub fn to_json_body(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Build the WCA authorize link shown by the login call-to-action.
pub fn build_authorize_url(authorize_url: &str, client_id: &str, redirect_uri: &str) -> String {
    let separator = if authorize_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}client_id={}&redirect_uri={}&response_type=code&scope=",
        authorize_url,
        separator,
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
    )
}

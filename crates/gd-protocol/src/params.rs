//! Request body encoding.
//!
//! A request is an ordered set of logical parameters. Encoding merges in
//! the fixed global parameters and, when the endpoint requires it, the
//! caller's authentication, then serializes to the POST body the server
//! expects:
//!
//! ```text
//! name=value&name=value&...   (no trailing '&')
//! ```
//!
//! Precedence is fixed: caller values never override a global or an
//! authentication parameter of the same name. Everything here is a pure
//! function of its inputs; the identity is passed per call.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use crate::cipher;
use crate::error::EncodeError;
use crate::wire_types::{GLOBAL_PARAMS, PARAM_ACCOUNT_ID, PARAM_GJP};

/// A parameter value and whether it needs percent-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Numeric codes, flags, tokens: sent as-is.
    Plain(String),
    /// Free text (search terms): percent-encoded.
    Text(String),
}

impl ParamValue {
    /// The value as it appears in the body.
    pub fn encoded(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Plain(v) => Cow::Borrowed(v.as_str()),
            ParamValue::Text(v) => urlencoding::encode(v),
        }
    }
}

/// Ordered logical parameters of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: IndexMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Params::default()
    }

    /// Add a value sent without encoding.
    pub fn plain(&mut self, name: &str, value: impl ToString) -> Result<&mut Self, EncodeError> {
        validate_name(name)?;
        let value = value.to_string();
        if !is_plain_safe(&value) {
            return Err(EncodeError::InvalidPlainValue {
                name: name.to_string(),
                value,
            });
        }
        self.pairs.insert(name.to_string(), ParamValue::Plain(value));
        Ok(self)
    }

    /// Add a free-text value, percent-encoded on serialization.
    pub fn text(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self, EncodeError> {
        validate_name(name)?;
        self.pairs.insert(name.to_string(), ParamValue::Text(value.into()));
        Ok(self)
    }

    /// `"1"` / `"0"`.
    pub fn flag(&mut self, name: &str, value: bool) -> Result<&mut Self, EncodeError> {
        self.plain(name, if value { "1" } else { "0" })
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.pairs.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert at the end, replacing any earlier pair of the same name.
    ///
    /// Only for values known to be valid (globals, derived auth).
    fn override_with(&mut self, name: &str, value: ParamValue) {
        self.pairs.shift_remove(name);
        self.pairs.insert(name.to_string(), value);
    }
}

fn validate_name(name: &str) -> Result<(), EncodeError> {
    let bad = name.is_empty()
        || name
            .chars()
            .any(|c| c == '&' || c == '=' || c.is_whitespace() || c.is_control());
    if bad {
        return Err(EncodeError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn is_plain_safe(value: &str) -> bool {
    !value
        .chars()
        .any(|c| c == '&' || c == '+' || c.is_whitespace() || c.is_control())
}

/// Account credentials used to authenticate a request.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    account_id: u64,
    password: String,
}

impl Identity {
    pub fn new(account_id: u64, password: impl Into<String>) -> Self {
        Identity {
            account_id,
            password: password.into(),
        }
    }

    pub fn account_id(&self) -> u64 {
        self.account_id
    }

    /// Password-derived token sent as `gjp`.
    pub fn gjp(&self) -> String {
        cipher::gjp(&self.password)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("account_id", &self.account_id)
            .field("password", &"******")
            .finish()
    }
}

/// A serialized request, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    pub path: String,
    pub body: String,
}

impl EncodedRequest {
    /// Body with the `gjp` value masked, for logs and error messages.
    pub fn redacted_body(&self) -> String {
        let prefix = format!("{PARAM_GJP}=");
        self.body
            .split('&')
            .map(|pair| {
                if pair.starts_with(&prefix) {
                    Cow::Owned(format!("{prefix}******"))
                } else {
                    Cow::Borrowed(pair)
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Merge caller parameters with globals and optional authentication.
///
/// Caller pairs keep their order; globals follow, then `accountID` and
/// `gjp`. A caller pair sharing a name with any of these is dropped.
pub fn merge_params(caller: &Params, auth: Option<&Identity>) -> Params {
    let mut merged = caller.clone();
    for (name, value) in GLOBAL_PARAMS {
        merged.override_with(name, ParamValue::Plain((*value).to_string()));
    }
    if let Some(identity) = auth {
        merged.override_with(
            PARAM_ACCOUNT_ID,
            ParamValue::Plain(identity.account_id().to_string()),
        );
        merged.override_with(PARAM_GJP, ParamValue::Plain(identity.gjp()));
    }
    merged
}

/// Join as `name=value` pairs with `&`.
pub fn serialize(params: &Params) -> String {
    params
        .pairs
        .iter()
        .map(|(name, value)| format!("{name}={}", value.encoded()))
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode a request for `path`.
///
/// `identity` is only consulted when `requires_auth` is set, and must be
/// present in that case.
pub fn encode(
    path: &str,
    params: &Params,
    requires_auth: bool,
    identity: Option<&Identity>,
) -> Result<EncodedRequest, EncodeError> {
    let auth = if requires_auth {
        Some(identity.ok_or_else(|| EncodeError::MissingIdentity {
            path: path.to_string(),
        })?)
    } else {
        None
    };

    Ok(EncodedRequest {
        path: path.to_string(),
        body: serialize(&merge_params(params, auth)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBALS: &str = "gameVersion=21&binaryVersion=35&secret=Wmfd2893gb7";

    #[test]
    fn fixed_literal_body_without_auth() {
        let mut p = Params::new();
        p.plain("page", 0).unwrap();
        let req = encode("/getGJLevels21.php", &p, false, None).unwrap();
        assert_eq!(req.path, "/getGJLevels21.php");
        assert_eq!(
            req.body,
            "page=0&gameVersion=21&binaryVersion=35&secret=Wmfd2893gb7"
        );
    }

    #[test]
    fn empty_params_still_carry_globals() {
        let req = encode("/x.php", &Params::new(), false, None).unwrap();
        assert_eq!(req.body, GLOBALS);
    }

    #[test]
    fn auth_params_follow_globals() {
        let id = Identity::new(71, "password");
        let req = encode("/x.php", &Params::new(), true, Some(&id)).unwrap();
        assert_eq!(req.body, format!("{GLOBALS}&accountID=71&gjp=Q1ZGQUFcRVE="));
    }

    #[test]
    fn identity_ignored_when_not_required() {
        let id = Identity::new(71, "password");
        let req = encode("/x.php", &Params::new(), false, Some(&id)).unwrap();
        assert_eq!(req.body, GLOBALS);
    }

    #[test]
    fn missing_identity_is_rejected() {
        let err = encode("/getGJMessages20.php", &Params::new(), true, None).unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingIdentity {
                path: "/getGJMessages20.php".to_string()
            }
        );
    }

    #[test]
    fn globals_and_auth_win_over_caller() {
        let mut p = Params::new();
        p.plain("secret", "mine")
            .unwrap()
            .plain("page", 2)
            .unwrap()
            .plain("accountID", 1)
            .unwrap();
        let id = Identity::new(71, "password");
        let merged = merge_params(&p, Some(&id));

        assert_eq!(merged.get("secret"), Some(&ParamValue::Plain("Wmfd2893gb7".into())));
        assert_eq!(merged.get("accountID"), Some(&ParamValue::Plain("71".into())));
        let names: Vec<_> = merged.names().collect();
        assert_eq!(
            names,
            vec!["page", "gameVersion", "binaryVersion", "secret", "accountID", "gjp"]
        );
    }

    #[test]
    fn merge_does_not_touch_caller_params() {
        let mut p = Params::new();
        p.plain("page", 1).unwrap();
        let _ = merge_params(&p, None);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn text_is_percent_encoded_plain_is_not() {
        let mut p = Params::new();
        p.text("str", "Bloodbath & more").unwrap().plain("diff", "-2,1").unwrap();
        assert_eq!(
            serialize(&p),
            "str=Bloodbath%20%26%20more&diff=-2,1"
        );
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut p = Params::new();
        assert!(matches!(p.plain("", 1), Err(EncodeError::InvalidName(_))));
        assert!(matches!(p.plain("a=b", 1), Err(EncodeError::InvalidName(_))));
        assert!(matches!(
            p.plain("str", "two words"),
            Err(EncodeError::InvalidPlainValue { .. })
        ));
        assert!(matches!(
            p.plain("x", "a&b"),
            Err(EncodeError::InvalidPlainValue { .. })
        ));
        assert!(p.is_empty());
    }

    #[test]
    fn redacts_gjp() {
        let id = Identity::new(71, "password");
        let req = encode("/x.php", &Params::new(), true, Some(&id)).unwrap();
        assert!(req.redacted_body().ends_with("accountID=71&gjp=******"));
        let debug = format!("{id:?}");
        assert!(debug.contains("******"));
        assert!(!debug.contains("\"password\""));
    }
}

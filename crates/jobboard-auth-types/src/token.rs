//! String formats for magic-link tokens and session ids.
//!
//! Neither format is signed. A magic token is `magic-token-<userId>_<4 chars>`
//! and a session id is `sess_<userId>_<6 chars>`; the random tail only keeps
//! successive values distinct.

use jobboard_domain::id::UserId;
use rand::RngExt;

pub const MAGIC_TOKEN_PREFIX: &str = "magic-token-";
pub const SESSION_ID_PREFIX: &str = "sess_";

const MAGIC_SUFFIX_LEN: usize = 4;
const SESSION_SUFFIX_LEN: usize = 6;

/// Lower-case base-36 alphabet.
const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub fn new_magic_token(user_id: &UserId) -> String {
    format!(
        "{MAGIC_TOKEN_PREFIX}{user_id}_{}",
        random_suffix(MAGIC_SUFFIX_LEN)
    )
}

/// Extract the user id from a magic token: strip the prefix, split on `_`,
/// take the first segment. Returns `None` for a missing prefix or empty id.
pub fn magic_token_user_id(token: &str) -> Option<&str> {
    token
        .strip_prefix(MAGIC_TOKEN_PREFIX)?
        .split('_')
        .next()
        .filter(|id| !id.is_empty())
}

pub fn new_session_id(user_id: &UserId) -> String {
    format!(
        "{SESSION_ID_PREFIX}{user_id}_{}",
        random_suffix(SESSION_SUFFIX_LEN)
    )
}

/// Extract the user id from a session id. Everything between the prefix and
/// the last `_` is the id.
pub fn session_id_user_id(session_id: &str) -> Option<&str> {
    let (id, _suffix) = session_id
        .strip_prefix(SESSION_ID_PREFIX)?
        .rsplit_once('_')?;
    (!id.is_empty()).then_some(id)
}

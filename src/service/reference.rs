use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated transaction references (62^16 possible values).
pub const TRANSACTION_REF_LEN: usize = 16;

/// Opaque alphanumeric string drawn from the thread-local CSPRNG.
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

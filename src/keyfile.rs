use crate::error::ServerError;
use rawrsa::PrivateKey;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the serde_json encoded private key.
///
/// The key is read once at startup; afterwards it is shared read-only
/// across all request handlers.
pub fn load_private_key(path: &Path) -> Result<PrivateKey, ServerError> {
    let f = File::open(path).map_err(|e| ServerError::ReadKeyFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    let key = serde_json::from_reader(BufReader::new(f))?;
    Ok(key)
}

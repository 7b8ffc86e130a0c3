//! Secret management commands.
//!
//! Inputs (secret name, file contents) are validated before the session is
//! opened, so bad arguments and unreadable files fail without any network
//! call.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::session::Session;
use crate::core::transport::Transport;
use crate::core::validation::validate_secret_name;
use crate::error::{Error, Result};

/// Default command: verify access and print a connection diagnostic.
pub fn overview(settings: Settings) -> Result<()> {
    let session = Session::open(settings)?;
    show_overview(&session);
    Ok(())
}

/// List secret names.
pub fn list(settings: Settings, json: bool) -> Result<()> {
    let session = Session::open(settings)?;
    show_list(&session, json)
}

/// Set a secret from a literal value.
pub fn set(settings: Settings, name: &str, value: String) -> Result<()> {
    validate_secret_name(name)?;
    let value = Zeroizing::new(value);

    let session = Session::open(settings)?;
    upload(&session, name, value.as_bytes())
}

/// Set a secret from a file, base64 encoding the contents before sealing.
pub fn set_file(settings: Settings, name: &str, path: &Path) -> Result<()> {
    validate_secret_name(name)?;
    let plaintext = file_plaintext(path, false)?;

    let session = Session::open(settings)?;
    upload(&session, name, &plaintext)
}

/// Set a secret from a file, sealing the raw bytes.
pub fn set_file_raw(settings: Settings, name: &str, path: &Path) -> Result<()> {
    validate_secret_name(name)?;
    let plaintext = file_plaintext(path, true)?;

    let session = Session::open(settings)?;
    upload(&session, name, &plaintext)
}

/// Delete a secret.
pub fn delete(settings: Settings, name: &str) -> Result<()> {
    validate_secret_name(name)?;

    let session = Session::open(settings)?;
    remove(&session, name)
}

/// Read a secret file, optionally base64 encoding it.
fn file_plaintext(path: &Path, raw: bool) -> Result<Zeroizing<Vec<u8>>> {
    let contents = std::fs::read(path)
        .map(Zeroizing::new)
        .map_err(|source| Error::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = contents.len(), raw, "read secret file");

    if raw {
        return Ok(contents);
    }
    Ok(Zeroizing::new(BASE64.encode(contents.as_slice()).into_bytes()))
}

fn show_overview<T: Transport>(session: &Session<T>) {
    let ctx = session.client().context();

    output::section("Connection");
    output::kv("repository: ", ctx.slug());
    output::kv("api:        ", ctx.api_url());
    output::kv("api version:", ctx.api_version());
    output::kv("key id:     ", &session.public_key().key_id);
    println!();
    output::hint("Nothing to do, please select a command! See --help");
}

fn show_list<T: Transport>(session: &Session<T>, json: bool) -> Result<()> {
    let secrets = session.client().list_secrets()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&secrets)?);
    } else if secrets.is_empty() {
        output::dimmed("no secrets stored");
    } else {
        output::section(&format!("{} secrets", secrets.len()));
        for secret in &secrets.secrets {
            let updated = format!("updated {}", secret.updated_at.format("%Y-%m-%d %H:%M"));
            output::list_item(&secret.name, Some(&updated));
        }
    }

    Ok(())
}

fn upload<T: Transport>(session: &Session<T>, name: &str, plaintext: &[u8]) -> Result<()> {
    info!("Setting secret: {}", name);
    let outcome = session.set_secret(name, plaintext)?;
    output::success(&format!("{} {}", outcome, output::key(name)));
    Ok(())
}

fn remove<T: Transport>(session: &Session<T>, name: &str) -> Result<()> {
    info!("Deleting secret: {}", name);
    session.client().delete_secret(name)?;
    output::success(&format!("deleted {}", output::key(name)));
    Ok(())
}

use std::fs::File;
use std::io;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Copies `scratch` into a staging file beside `dest`, then renames it over
/// `dest`.
///
/// The staging file gets default permissions (`0666` less the umask on Unix),
/// not the owner-only mode of a scratch file. Any failure leaves `dest` as it
/// was.
pub(super) async fn commit(scratch: &Path, dest: &Path) -> io::Result<()> {
    let scratch = scratch.to_path_buf();
    let dest = dest.to_path_buf();

    tokio::task::spawn_blocking(move || commit_blocking(&scratch, &dest))
        .await
        .map_err(io::Error::other)?
}

fn commit_blocking(scratch: &Path, dest: &Path) -> io::Result<()> {
    let dir = match dest.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = staging_file(dir)?;
    io::copy(&mut File::open(scratch)?, staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    staged.persist(dest).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(unix)]
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .prefix(".upload-")
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().prefix(".upload-").tempfile_in(dir)
}

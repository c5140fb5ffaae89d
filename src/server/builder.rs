//! Response construction for each routing strategy.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use log::debug;

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::RenderedResponse;
use crate::server::router::ResponseStrategy;

/// The host named in the links of the root listing.
const LISTING_HOST: &str = "127.0.0.1";

/// The entries of the fixed subdirectory listing.
const FIXED_ENTRIES: [&str; 4] = ["a", "b", "c", "d"];

/// Pick the content type for a requested path.
///
/// This is a plain substring test, not an extension check.
///
/// # Examples
///
/// ```
/// use webroot_server::content_type_for;
///
/// assert_eq!(content_type_for("/index.html"), "text/html");
/// assert_eq!(content_type_for("/notes.htmlish"), "text/html");
/// assert_eq!(content_type_for("/notes.txt"), "text/plain");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    if path.contains(".html") {
        "text/html"
    } else {
        "text/plain"
    }
}

/// Resolve a request path against the web root.
///
/// The path is appended as is. Nothing is normalized, so `..` segments are
/// followed.
pub fn resolve_static_path(web_root: &Path, requested_path: &str) -> PathBuf {
    let mut resolved = OsString::from(web_root.as_os_str());
    resolved.push(requested_path);
    PathBuf::from(resolved)
}

/// Render the response for a strategy.
pub async fn render(
    strategy: &ResponseStrategy,
    requested_path: &str,
    config: &ServerConfig,
) -> Result<RenderedResponse, Error> {
    let response = match strategy {
        // The root page always announces itself as HTML.
        ResponseStrategy::RootListing => RenderedResponse::ok()
            .with_content_type("text/html")
            .with_body(root_listing(config).await?),
        ResponseStrategy::FixedSubdirectoryListing => RenderedResponse::ok()
            .with_content_type(content_type_for(requested_path))
            .with_body(fixed_subdirectory_listing()),
        ResponseStrategy::StaticFile(path) => RenderedResponse::ok()
            .with_content_type(content_type_for(path))
            .with_body(static_file(path, config).await?),
    };
    Ok(response)
}

/// Build the listing of the web root's immediate subdirectories.
async fn root_listing(config: &ServerConfig) -> Result<String, Error> {
    let root = &config.web_root;
    let list_error = |source| Error::DirectoryList {
        path: root.clone(),
        source,
    };

    let mut entries = tokio::fs::read_dir(root).await.map_err(list_error)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_error)? {
        // Follow symlinks, so a linked directory is listed too.
        match tokio::fs::metadata(entry.path()).await {
            Ok(meta) if meta.is_dir() => {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            Ok(_) => {}
            Err(err) => debug!("Skipping {}: {err}", entry.path().display()),
        }
    }
    names.sort();

    let mut body = String::from(
        "<html>\n\
         \t<title>this is my webpage</title>\n\
         </head>\n\
         <body>\n\
         My directory listing:<br/>\n",
    );
    for name in &names {
        body.push_str(&format!(
            "<a href=\"http://{LISTING_HOST}:{port}/webroot/{name}/{default_file}\">{name}</a><br/>\n",
            port = config.port,
            default_file = config.default_file,
        ));
    }
    Ok(body)
}

/// Build the hardcoded listing of `webroot/subdirectory`.
///
/// The entries are fixed and never checked against the file system.
fn fixed_subdirectory_listing() -> String {
    FIXED_ENTRIES
        .iter()
        .map(|name| format!("<a href=\"/webroot/subdirectory/{name}.txt\">{name}</a><br>"))
        .collect()
}

/// Read a static file as text.
///
/// Bytes that are not valid UTF-8 are replaced, not rejected.
async fn static_file(requested_path: &str, config: &ServerConfig) -> Result<String, Error> {
    let path = resolve_static_path(&config.web_root, requested_path);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| Error::FileNotFound { path, source })?;
    let content = String::from_utf8_lossy(&bytes);

    if config.strip_newlines {
        // A lone CR ends a line as well.
        Ok(content.split(&['\r', '\n'][..]).collect())
    } else {
        Ok(content.into_owned())
    }
}

//! URL extraction from link-bearing files.
//!
//! Extraction is dispatched on the file's [`FileKind`]:
//!
//! - `.url` shortcut files: `URL=` and `BaseURL=` lines only
//! - `.md` markdown: inline `[text](target)` links plus bare URLs
//! - `.html` / `.htm`: `href` and `src` attribute values plus bare URLs
//! - `.txt` plain text: bare URLs only
//!
//! Every candidate goes through [`is_valid_url`] before it lands in the
//! per-file [`UrlSet`].
//!
//! # Examples
//!
//! ```rust
//! use linkfetch::extract::{extract_urls, FileKind};
//!
//! let urls = extract_urls(FileKind::Markdown, "[x](https://host.test/file1.zip)");
//! assert_eq!(urls.len(), 1);
//! assert!(urls.contains("https://host.test/file1.zip"));
//! ```

pub mod extractor;
pub mod kind;
pub mod set;
pub mod validate;

pub use extractor::{extract_from_file, extract_urls};
pub use kind::FileKind;
pub use set::UrlSet;
pub use validate::is_valid_url;

//! Gallery layer for the sorting visualizer.
//!
//! Sits between the engine and any renderer: loads the RON gallery
//! manifest, builds the item collection from an asset source (fail-fast --
//! a broken asset means no run is offered), and manages the run lifecycle
//! on a worker thread so paced commits never block a UI thread.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sortviz_gallery::{RunSession, build_collection, load_manifest};
//!
//! let manifest = load_manifest(Path::new("assets"))?;
//! let collection = build_collection(&manifest, &mut source)?;
//! let mut session = RunSession::new(collection);
//! session.start(Algorithm::Bubble)?;
//! let commits = session.poll();
//! ```

pub mod collection;
pub mod error;
pub mod manifest;
pub mod session;
pub mod source;

pub use collection::{Collection, build_collection};
pub use error::GalleryError;
pub use manifest::{GalleryManifest, ImageEntry, load_manifest};
pub use session::RunSession;
pub use source::{AssetLoadError, AssetSource, FixedSource};

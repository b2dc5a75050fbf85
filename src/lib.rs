//! # backup-bridge
//!
//! Translates the backup section of a Laravel style application config into
//! the object model of the phpbu backup engine.
//!
//! ## Features
//!
//! - **Directory backups**: mapped to archive sources
//! - **Database backups**: connection lookup, driver allow-list, mysqldump/pgdump sources
//! - **Targets, checks, syncs, cleanups, crypts**: validated and passed on
//! - **Deterministic**: fixed kind order, declaration order, first error wins
//!
//! ## Quick Start
//!
//! ```
//! use backup_bridge::bridge::store::JsonStore;
//! use backup_bridge::bridge::translator::translate;
//!
//! let store = JsonStore::from_yaml_str(
//!     "phpbu:
//!   config: phpbu.json
//!   directories:
//!     - source: { path: /var/www/storage }
//!       target: { dirname: /backup, filename: storage.tar }
//! ",
//! )?;
//!
//! let configuration = translate(&store)?;
//! assert_eq!(configuration.backups()[0].name(), "/var/www/storage");
//! # Ok::<(), backup_bridge::bridge::result_error::error::Error>(())
//! ```

pub mod bridge;

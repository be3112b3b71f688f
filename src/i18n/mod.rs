// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! - Locale resolved from CLI, config, then the OS, falling back to `en-US`
//! - Translations embedded in the binary, optionally overridden by `.ftl`
//!   files from a directory given with `--i18n-dir`
//! - Missing keys render as `MISSING: <key>` so gaps are visible in the UI

pub mod fluent;

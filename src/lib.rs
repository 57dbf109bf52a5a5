//! # ghosthost
//!
//! Turns a short business description into a ready-to-upload static website.
//! A small-business owner supplies a name, a tagline, contact handles and an
//! optional menu; ghosthost produces an HTML landing page, its stylesheet, a
//! JSON copy of the menu, and a plain-text guide to publishing the files.
//!
//! # Architecture: Validate, Sanitize, Expand
//!
//! ```text
//! JSON record ─▶ validate ─▶ sanitize ─▶ expand template ─▶ index.html
//!                  │                        ▲                styles.css
//!                  ▼                        │                menu.json
//!            error list              template + theme        deployment-instructions.txt
//!                                    (AssetSource)
//! ```
//!
//! Validation reports every problem with the raw record at once. Only a valid
//! record is built; the build itself never fails on user data, only on
//! missing assets.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | Raw, untrusted input types with lenient JSON parsing |
//! | [`theme`] | The two visual themes and how their names are read |
//! | [`validate`] | Collects every problem with a raw record |
//! | [`sanitize`] | HTML-escapes and filters raw fields into a [`sanitize::SanitizedRecord`] |
//! | [`template`] | Mustache-like expander: placeholders, loops, empty/has-items blocks |
//! | [`assets`] | Where the base template and theme stylesheets come from |
//! | [`artifacts`] | Builds and writes the four-file bundle |
//! | [`instructions`] | The static deployment guide |
//! | [`presets`] | Canned taglines, descriptions and menus per business type |
//! | [`server`] | Line-delimited JSON-RPC tool server for automated callers |
//! | [`config`] | `ghosthost.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Escape Exactly Once
//!
//! Every user string is HTML-escaped by [`sanitize`] and nowhere else. The
//! template expander inserts values verbatim, and templates and themes are
//! trusted content. Escaping in two places would double-encode `&`; escaping
//! in none would let a menu item carry a `<script>` tag into the page.
//!
//! ## A Tiny Template Language
//!
//! The base template is plain HTML with `{{name}}` placeholders and three
//! section forms (`{{#list}}`, `{{?empty:list}}`, `{{?hasItems:list}}`). It is
//! small enough that users can keep their own copy under `assets_dir` without
//! learning a template engine, and it has no way to execute code.
//!
//! ## Asset Sources Behind a Trait
//!
//! The artifact builder asks an [`assets::AssetSource`] for the template and
//! stylesheet. The built-in assets are compiled into the binary, so a single
//! executable is enough to generate a site; a directory source lets users
//! restyle without rebuilding, and tests substitute a mock.
//!
//! ## Four Plain Files
//!
//! The output is static HTML, CSS and JSON with no build step and no runtime.
//! Any drag-and-drop static host can serve it, and the deployment guide only
//! has to explain uploading files.

pub mod artifacts;
pub mod assets;
pub mod config;
pub mod instructions;
pub mod output;
pub mod presets;
pub mod record;
pub mod sanitize;
pub mod server;
pub mod template;
pub mod theme;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seomark.toml`:
//!
//! | Module   | TOML Section | Purpose                               |
//! |----------|--------------|---------------------------------------|
//! | `site`   | `[site]`     | Site name, tagline, url, logo         |
//! | `store`  | `[store]`    | Options/metadata store location       |
//! | `admin`  | `[admin]`    | Meta box post types, edit token key   |
//! | `schema` | `[schema]`   | Extra JSON-LD properties              |

mod admin;
mod schema;
pub mod site;
mod store;

pub use admin::AdminConfig;
pub use schema::SchemaConfig;
pub use site::SiteSectionConfig;
pub use store::StoreConfig;

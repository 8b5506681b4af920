//! Configuration section definitions.
//!
//! Each module corresponds to a section in `podfeed.toml`:
//!
//! | Module    | TOML Section  | Purpose                                  |
//! |-----------|---------------|------------------------------------------|
//! | `build`   | `[build]`     | Output directory, manifest, formatting   |
//! | `feed`    | `[feed]`      | Feed identity, links, cutoff, format     |
//! | `podcast` | `[podcast]`   | iTunes extension tags                    |
//! | `site`    | `[site]`      | Site name and base URL                   |

mod build;
mod feed;
mod podcast;
mod site;

pub use build::BuildConfig;
pub use feed::{FeedConfig, FeedFormat};
pub use podcast::PodcastSectionConfig;
pub use site::SiteConfig;

//! Content pipeline: Markdown files in, JSON indexes out.
//!
//! ```text
//! content/cars/*.md ─▶ frontmatter ─▶ normalize ─▶ images ─▶ index ─▶ data/cars-index.json
//! ```
//!
//! | Module        | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `frontmatter` | List files, split and parse YAML frontmatter     |
//! | `field`       | `RawField`, the tagged union for loose values    |
//! | `normalize`   | Defaults and coercion into records               |
//! | `images`      | Image path resolution                            |
//! | `index`       | Sorting, atomic JSON writes, build orchestration |
//! | `record`      | `CarRecord`, `ContactRecord`, `CarStatus`        |

pub mod field;
pub mod frontmatter;
pub mod images;
pub mod index;
pub mod normalize;
mod record;

pub use field::RawField;
pub use frontmatter::{Document, FrontmatterError};
pub use index::{IndexError, IndexReport, build_cars_index, build_contacts_index};
pub use normalize::{normalize_car, normalize_contact};
pub use record::{CarRecord, CarStatus, ContactRecord};

/// JSON object map, insertion ordered.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

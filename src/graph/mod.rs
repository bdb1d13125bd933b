//! Graph entities decoded from suffix-annotated agtype values.
//!
//! `Vertex` and `Edge` compare, and hash, by `id` alone. Two vertices with
//! the same id but different labels or properties are equal; callers build
//! neighbor sets and de-duplicate on that identity.

mod edge;
mod graph_id;
mod path;
mod vertex;

pub use edge::Edge;
pub use graph_id::GraphId;
pub use path::Path;
pub use vertex::Vertex;


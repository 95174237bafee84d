//! Domain model for a colony
//!
//! A colony is described by a [`Document`]: the registered colonists and
//! resources, the rivalries between colonists and one preference list per
//! colonist. Documents produced by the parser or the manual builder always
//! satisfy the invariants below:
//!
//! - colonist and resource names are alphanumeric and never shared
//! - every conflict joins two distinct registered colonists
//! - every preference list is a permutation of the resource set

mod conflict;
mod document;
mod ids;
mod preference;
mod registry;


pub use conflict::{ConflictPair, ConflictRegistry};
pub use document::Document;
pub use ids::{is_valid_name, ColonistId, ResourceId};
pub use preference::{PreferenceList, PreferenceTable};
pub use registry::{EntityRegistry, Namespace, RegistryError};

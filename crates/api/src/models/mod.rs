pub mod analysis;
pub mod index;
pub mod kind;
pub mod location;
pub mod node;

pub use analysis::*;
pub use index::*;
pub use kind::*;
pub use location::*;
pub use node::*;

pub mod analysis;
pub mod feed;
pub mod hypothesis;
pub mod metric;
pub mod session;
pub mod topic;

pub use analysis::*;
pub use feed::*;
pub use hypothesis::*;
pub use metric::*;
pub use session::*;
pub use topic::*;

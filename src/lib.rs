//! readconcern - Read concern values for a replicated document database
//!
//! A read concern is attached to read commands to request a consistency
//! guarantee such as "majority-acknowledged data only".
//!
//! ```
//! use readconcern::document::Document;
//! use readconcern::read_concern::{ReadConcern, ReadConcernLevel};
//!
//! let rc: ReadConcern = ReadConcern::from_level(ReadConcernLevel::Majority);
//! let mut command = Document::new();
//! command.insert("find", "users");
//! rc.append(&mut command).unwrap();
//! assert_eq!(command.get_str("level"), Some("majority"));
//! ```

pub mod document;
pub mod native;
pub mod observability;
pub mod read_concern;

pub use document::Document;
pub use read_concern::{ReadConcern, ReadConcernError, ReadConcernLevel};

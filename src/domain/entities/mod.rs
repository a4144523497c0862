mod link;

pub use link::{Link, LinkPatch, NewLink};

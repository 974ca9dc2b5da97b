//! Social handlers: likes and the public timeline.

mod get_timeline;
mod like_record;
mod unlike_record;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_timeline::{GetTimelineHandler, GetTimelineQuery};
pub use like_record::{LikeRecordCommand, LikeRecordHandler};
pub use unlike_record::{UnlikeRecordCommand, UnlikeRecordHandler};

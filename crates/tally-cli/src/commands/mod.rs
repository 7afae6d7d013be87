pub mod dispatch;
pub mod feedback;
pub mod list;
pub mod overview;
pub mod schema;
pub mod startup;
pub mod tags;

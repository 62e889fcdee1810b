mod catalog;
mod ids;
mod song;

pub use catalog::Catalog;
pub use ids::SongId;
pub use song::Song;

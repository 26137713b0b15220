//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read/insert methods
//! that accept `&SqlitePool` as the first argument. Every method runs in its
//! own transaction: committed on success, rolled back when dropped on an
//! error path.

pub mod article_repo;
pub mod character_repo;
pub mod place_repo;

pub use article_repo::ArticleRepo;
pub use character_repo::CharacterRepo;
pub use place_repo::PlaceRepo;

//! Photo Use Cases
//!
//! Loading photos for the gallery views.

mod get_photo_by_id;
mod list_album_photos;
mod list_photos;

pub use get_photo_by_id::GetPhotoByIdUseCase;
pub use list_album_photos::ListAlbumPhotosUseCase;
pub use list_photos::ListPhotosUseCase;

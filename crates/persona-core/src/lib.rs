pub mod carousel;
pub mod directory;
pub mod images;

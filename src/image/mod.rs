pub mod background;
pub mod io;
pub mod roi;
pub mod traits;
pub mod u8;

pub use self::roi::Roi;
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;

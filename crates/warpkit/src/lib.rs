#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use warpkit_image as image;

#[doc(inline)]
pub use warpkit_imgproc as imgproc;

#[doc(inline)]
pub use warpkit_io as io;

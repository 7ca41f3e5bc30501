pub(crate) mod circle_circle;
pub(crate) mod obb_circle;
pub(crate) mod obb_obb;

pub(crate) use circle_circle::*;
pub(crate) use obb_circle::*;
pub(crate) use obb_obb::*;

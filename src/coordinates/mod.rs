//! Angles and coordinate systems shared by the position calculators

pub mod angle;
pub mod cartesian;
pub mod spherical;

pub use angle::Angle;
pub use cartesian::RectangularVector;
pub use spherical::SphericalCoordinate;

pub mod curve;
pub mod edge;
pub mod segment;
pub mod trapezoid;

mod trip;

pub use trip::{Trip, TripType};

mod hit;
mod ray;

pub use hit::Hit;
pub use ray::Ray;

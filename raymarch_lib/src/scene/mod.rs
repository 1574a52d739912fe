mod object;
mod scene;

pub use object::{Plane, SceneObject, Sphere};
pub use scene::Scene;

pub mod cylinder;
pub mod fan;
pub mod mesh;
pub mod propeller;
pub mod rudder;
pub mod sphere;

pub use cylinder::Cylinder;
pub use fan::FanMesh;
pub use mesh::MeshData;
pub use propeller::Propeller;
pub use rudder::Rudder;
pub use sphere::Sphere;

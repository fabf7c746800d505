pub mod settings;

pub use settings::SceneSettings;

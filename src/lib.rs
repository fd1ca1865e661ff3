pub mod classes;
pub mod preprocess;
pub mod server;
pub mod torch;

/// Leafscan configuration -- can eventually be lazy_static parsed from a
/// config file
pub mod config {
    /// Default path to the TorchScript classifier, relative to the
    /// deployment directory
    pub const MODEL_PATH: &str = "models/plant_disease_model.pt";

    /// Side length the classifier expects its input images to be
    pub const INPUT_SIZE: i64 = 224;

    /// Default log filter
    pub const RUST_LOG: &str = "info,actix_web=info";
}

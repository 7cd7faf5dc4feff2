/// Output canvas assembly from matched tiles
pub mod compositor;
/// Colour matching of cells against the tile set
pub mod matcher;
/// Mosaic configuration and pipeline orchestration
pub mod pipeline;

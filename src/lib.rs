pub mod config;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod maze;
pub mod path;
pub mod render;

use crate::{
    config::MazeConfig,
    error::MazeError,
    generators::generate_maze,
    maze::Maze,
    path::{MazeDrawing, PathEmitter},
};

/// Builds a perfect maze for `config` and returns its walls as drawing segments.
///
/// Nothing is generated if the configuration is rejected. A `seed` makes the run reproducible.
pub fn build_maze(config: &MazeConfig, seed: Option<u64>) -> Result<MazeDrawing, MazeError> {
    let layout = config.validate()?;

    let mut maze = Maze::new(config.rows, config.cols)?;
    generate_maze(&mut maze, seed)?;

    let mut emitter = PathEmitter::new(&maze, layout);
    emitter.emit_boundary(config.entrance, config.exit);
    emitter.emit_inner_walls();
    let drawing = emitter.finish();

    tracing::info!(
        "[maze] Built {}x{} maze with {} segments",
        config.rows,
        config.cols,
        drawing.segments.len()
    );
    Ok(drawing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConfigError, path::Side};

    #[test]
    fn test_build_default_maze() {
        let drawing = build_maze(&MazeConfig::default(), Some(9)).unwrap();
        assert_eq!(drawing.cell_length(), 30);
        // 6 boundary strokes, 180 walls minus 99 passages
        assert_eq!(drawing.strokes().len(), 6 + 81);
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let config = MazeConfig {
            rows: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            build_maze(&config, None),
            Err(MazeError::InvalidConfig(ConfigError::ZeroDimension {
                rows: 0,
                cols: 10
            }))
        );
    }

    #[test]
    fn test_single_cell_maze() {
        let config = MazeConfig {
            rows: 1,
            cols: 1,
            entrance: Side::Top,
            exit: Side::Right,
            ..MazeConfig::default()
        };
        let drawing = build_maze(&config, None).unwrap();
        assert_eq!(drawing.cell_length(), 300);
        assert_eq!(drawing.strokes().len(), 2);
    }
}

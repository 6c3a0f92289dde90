use svg::{
    Document,
    node::element::{Path, Rectangle, path::Data},
};

use crate::path::{MazeDrawing, Segment};

/// Strokes the maze walls black, one pixel wide, on a white canvas.
pub fn to_svg(drawing: &MazeDrawing) -> Document {
    let layout = drawing.layout;
    let mut data = Data::new();
    for segment in &drawing.segments {
        data = match *segment {
            Segment::MoveTo(to) => data.move_to::<(f32, f32)>((to.x as f32, to.y as f32)),
            Segment::LineTo { to, .. } => data.line_to::<(f32, f32)>((to.x as f32, to.y as f32)),
        };
    }

    let background = Rectangle::new()
        .set("width", layout.canvas_width)
        .set("height", layout.canvas_height)
        .set("fill", "white");
    let walls = Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 1)
        .set("stroke-linecap", "square")
        .set("d", data);

    Document::new()
        .set("width", layout.canvas_width)
        .set("height", layout.canvas_height)
        .set(
            "viewBox",
            format!("0 0 {} {}", layout.canvas_width, layout.canvas_height),
        )
        .add(background)
        .add(walls)
}

/// One `M x y` or `L x y` line per segment.
pub fn to_text(drawing: &MazeDrawing) -> String {
    drawing
        .segments
        .iter()
        .map(|segment| format!("{segment}\n"))
        .collect()
}

use super::Board;
use crate::{NodeExtents, Orientation, Point, PositionSink, Vec2};

/// Assign a position to every node of a board, column by column
///
/// All arithmetic happens in layout axes (x along the depth axis); vertical
/// layouts transpose the finished point on the way out. Each column's stack
/// is centered around the secondary origin with the trailing margin of every
/// node included in the stack height, which leaves the visual center half a
/// margin off true center. Saved layouts depend on that exact arithmetic, so
/// it is kept as is.
pub(crate) fn assign_positions<N, S, P>(
    board: &Board<N>,
    extents: &S,
    margin: Vec2,
    orientation: Orientation,
    offset: Vec2,
    sink: &mut P,
) where
    N: Copy,
    S: NodeExtents<N>,
    P: PositionSink<N>,
{
    let margin = if orientation.is_vertical() {
        margin.transposed()
    } else {
        margin
    };

    let mut x = 0.0;
    for (_, column) in board.columns() {
        let sizes: Vec<Vec2> = column.iter().map(|&node| extents.extent(node)).collect();
        let column_width = sizes.iter().fold(0.0f32, |width, size| width.max(size.x));
        let column_height: f32 = sizes.iter().map(|size| size.y + margin.y).sum();

        let mut y = 0.0;
        for (&node, size) in column.iter().zip(&sizes) {
            let position = Point::new(x + offset.x, y - column_height / 2.0 + offset.y);
            let position = if orientation.is_vertical() {
                position.transposed()
            } else {
                position
            };
            sink.place(node, position);

            y += size.y + margin.y;
        }

        x += column_width + margin.x;
    }
}

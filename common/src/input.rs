use crate::Vec2;

/// Map a pointer click to a cardinal velocity for the snake.
///
/// The dominant axis of the click-to-head offset wins and exactly one
/// component of the result is nonzero, so the snake never moves diagonally
/// and never stops. Sign convention: a click above the head steers up, a
/// click right of the head steers left.
pub fn velocity_for_click(head: Vec2, click: Vec2) -> Vec2 {
    let offset = click - head;
    if offset.y.abs() > offset.x.abs() {
        if click.y < head.y {
            Vec2::new(0.0, -1.0)
        } else {
            Vec2::new(0.0, 1.0)
        }
    } else if click.x < head.x {
        Vec2::new(1.0, 0.0)
    } else {
        Vec2::new(-1.0, 0.0)
    }
}

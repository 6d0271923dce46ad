use crate::basic::CellDim;
use ggez::graphics::Color;
use num_integer::Integer;

/// Side of a board cell in pixels
pub const CELL_SIDE: u32 = 32;

/// Block colors of one cell, row-major
pub type Sprite = [[Color; CellDim::SUBDIVISIONS]; CellDim::SUBDIVISIONS];

/// Corners, edges and center, the pattern every sprite in the game follows
fn framed_sprite(corner: Color, edge: Color, center: Color) -> Sprite {
    [
        [corner, edge, corner],
        [edge, center, edge],
        [corner, edge, corner],
    ]
}

lazy_static! {
    static ref FOOD_SPRITE: Sprite = framed_sprite(
        Color::from_rgb(255, 170, 0),
        Color::from_rgb(255, 120, 0),
        Color::from_rgb(255, 40, 40),
    );
    static ref HEAD_SPRITE: Sprite = framed_sprite(
        Color::from_rgb(40, 160, 40),
        Color::from_rgb(60, 200, 60),
        Color::from_rgb(0, 255, 0),
    );
    static ref BODY_EVEN_SPRITE: Sprite = framed_sprite(
        Color::from_rgb(20, 130, 20),
        Color::from_rgb(30, 150, 30),
        Color::from_rgb(20, 180, 20),
    );
    static ref BODY_ODD_SPRITE: Sprite = framed_sprite(
        Color::from_rgb(15, 90, 15),
        Color::from_rgb(25, 110, 25),
        Color::from_rgb(10, 140, 10),
    );
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SpriteKind {
    Food,
    Head,
    BodyEven,
    BodyOdd,
}

impl SpriteKind {
    /// Segment 0 is the head, the body alternates by index
    pub fn for_segment(idx: usize) -> Self {
        match idx {
            0 => Self::Head,
            i if i.is_even() => Self::BodyEven,
            _ => Self::BodyOdd,
        }
    }
}

pub struct Palette {
    pub background_color: Color,

    pub grid_color: Color,
    pub grid_thickness: f32,

    /// Outline drawn over every sprite block
    pub block_border_color: Color,
    pub block_border_thickness: f32,

    pub score_color: Color,
    pub game_over_color: Color,
    /// Laid over the board while the game over text is shown
    pub game_over_shade: Color,

    pub food: Sprite,
    pub head: Sprite,
    pub body_even: Sprite,
    pub body_odd: Sprite,
}

impl Palette {
    pub fn pixel() -> Self {
        Self {
            background_color: Color::BLACK,

            grid_color: Color::from_rgb(30, 30, 30),
            grid_thickness: 1.,

            block_border_color: Color::from_rgba(0, 0, 0, 40),
            block_border_thickness: 1.,

            score_color: Color::WHITE,
            game_over_color: Color::RED,
            game_over_shade: Color::from_rgba(0, 0, 0, 200),

            food: *FOOD_SPRITE,
            head: *HEAD_SPRITE,
            body_even: *BODY_EVEN_SPRITE,
            body_odd: *BODY_ODD_SPRITE,
        }
    }

    pub fn sprite(&self, kind: SpriteKind) -> &Sprite {
        match kind {
            SpriteKind::Food => &self.food,
            SpriteKind::Head => &self.head,
            SpriteKind::BodyEven => &self.body_even,
            SpriteKind::BodyOdd => &self.body_odd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_kinds() {
        use SpriteKind::*;
        let kinds: Vec<_> = (0..6).map(SpriteKind::for_segment).collect();
        assert_eq!(kinds, [Head, BodyOdd, BodyEven, BodyOdd, BodyEven, BodyOdd]);
    }

    #[test]
    fn test_sprites_are_distinct() {
        let palette = Palette::pixel();
        let kinds = [SpriteKind::Food, SpriteKind::Head, SpriteKind::BodyEven, SpriteKind::BodyOdd];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(palette.sprite(*a), palette.sprite(*b), "{a:?} == {b:?}");
            }
        }
    }

    #[test]
    fn test_food_sprite_layout() {
        let food = Palette::pixel().food;
        let (corner, edge, center) = (
            Color::from_rgb(255, 170, 0),
            Color::from_rgb(255, 120, 0),
            Color::from_rgb(255, 40, 40),
        );
        assert_eq!(food[1][1], center);
        assert_eq!(food[0][0], corner);
        assert_eq!(food[2][2], corner);
        assert_eq!(food[0][1], edge);
        assert_eq!(food[1][0], edge);
    }
}

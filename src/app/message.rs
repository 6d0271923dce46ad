use crate::basic::Point;
use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextLayout};

pub enum Position {
    TopLeft,
    /// Centered on the board, shifted down by the given amount
    Center(f32),
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub h_margin: f32,
    pub v_margin: f32,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 8.;

    pub fn top_left(text: String, font_size: f32, color: Color) -> Self {
        Self {
            text,
            position: Position::TopLeft,
            h_margin: Self::DEFAULT_MARGIN,
            v_margin: Self::DEFAULT_MARGIN / 2.,
            font_size,
            color,
        }
    }

    pub fn centered(text: String, offset: f32, font_size: f32, color: Color) -> Self {
        Self {
            text,
            position: Position::Center(offset),
            h_margin: 0.,
            v_margin: 0.,
            font_size,
            color,
        }
    }

    /// Where the text is anchored on a board of the given pixel size and
    /// how it's aligned around that anchor
    pub fn anchor(&self, board_size: Point) -> (Point, TextLayout) {
        match self.position {
            Position::TopLeft => (
                Point { x: self.h_margin, y: self.v_margin },
                TextLayout::top_left(),
            ),
            Position::Center(offset) => (
                Point { x: board_size.x / 2., y: board_size.y / 2. + offset }
                    + Point { x: self.h_margin, y: self.v_margin },
                TextLayout::center(),
            ),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, board_size: Point) {
        let (dest, layout) = self.anchor(board_size);

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);

        canvas.draw(&text, DrawParam::default().dest(dest).color(self.color))
    }
}

#[test]
fn test_anchors() {
    let board = Point { x: 800., y: 576. };

    let score = Message::top_left("Score: 0".to_string(), 18., Color::WHITE);
    assert_eq!(score.anchor(board).0, Point { x: 8., y: 4. });

    let title = Message::centered("GAME OVER".to_string(), -30., 54., Color::RED);
    assert_eq!(title.anchor(board).0, Point { x: 400., y: 258. });
}

//! # Lattice Canvas Widget
//!
//! Draws the pitch lattice: one node per coordinate, fifths running left to
//! right and major thirds running upwards. Each node is labelled with its
//! note name, its ratio to the origin and its frequency.
//!
//! ## Features
//! - Lattice centred in the window whatever the mode's layout
//! - Lines between fifth and third neighbours
//! - Origin node highlighted
//! - Drawing cached until the coordinates change

use iced::widget::canvas::{self, Cache, Geometry, Path, Stroke, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme, Vector};
use lattices_core::lattice::{self, Coord};
use lattices_core::Origin;

/// Radius of a node, as a fraction of the node spacing.
const NODE_RADIUS: f32 = 0.28;

const BACKGROUND: Color = Color::BLACK;
const EDGE_COLOR: Color = Color { r: 0.45, g: 0.45, b: 0.55, a: 1.0 };
const NODE_COLOR: Color = Color { r: 0.85, g: 0.75, b: 0.85, a: 1.0 }; // Thistle
const ORIGIN_COLOR: Color = Color { r: 0.95, g: 0.65, b: 0.3, a: 1.0 };
const LABEL_COLOR: Color = Color::BLACK;
const DETAIL_COLOR: Color = Color { r: 0.7, g: 0.7, b: 0.7, a: 1.0 };

pub struct LatticeCanvas<'a> {
    coords: &'a [Coord],
    origin: Origin,
    spacing: f32,
    cache: &'a Cache,
}

impl<'a> LatticeCanvas<'a> {
    pub fn new(coords: &'a [Coord], origin: Origin, spacing: f32, cache: &'a Cache) -> Self {
        Self {
            coords,
            origin,
            spacing,
            cache,
        }
    }

    pub fn view(self) -> Element<'a, crate::Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Offset that puts the middle of the lattice's bounding box at the
    /// centre of the canvas.
    fn centring_offset(&self) -> Vector {
        let (min_x, max_x) = min_max(self.coords.iter().map(|c| c.x));
        let (min_y, max_y) = min_max(self.coords.iter().map(|c| c.y));
        Vector::new(
            -(min_x as f32 + max_x as f32) / 2.0 * self.spacing,
            (min_y as f32 + max_y as f32) / 2.0 * self.spacing,
        )
    }

    fn node_position(&self, center: Point, offset: Vector, coord: Coord) -> Point {
        // Screen y grows downwards, thirds go up.
        center + offset + Vector::new(coord.x as f32 * self.spacing, -(coord.y as f32) * self.spacing)
    }
}

/// Smallest and largest value, `(0, 0)` for an empty iterator.
fn min_max(mut values: impl Iterator<Item = i32>) -> (i32, i32) {
    let Some(first) = values.next() else {
        return (0, 0);
    };
    values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Ratio and frequency under a node. Ratios too large to write out exactly
/// are shown in cents.
fn detail_label(coord: Coord, origin: &Origin) -> String {
    let interval = match coord.ratio() {
        Some(ratio) => ratio.to_string(),
        None => format!("{:.1}c", coord.cents()),
    };
    format!("{}  {:.1} Hz", interval, origin.frequency_of(coord))
}

impl<Message> canvas::Program<Message> for LatticeCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), BACKGROUND);

            if !bounds.width.is_finite() || !bounds.height.is_finite() || self.coords.is_empty() {
                return;
            }

            let center = frame.center();
            let offset = self.centring_offset();

            for (a, b) in lattice::edges(self.coords) {
                let line = Path::line(
                    self.node_position(center, offset, self.coords[a]),
                    self.node_position(center, offset, self.coords[b]),
                );
                frame.stroke(
                    &line,
                    Stroke::default().with_width(2.0).with_color(EDGE_COLOR),
                );
            }

            let radius = self.spacing * NODE_RADIUS;
            for &coord in self.coords {
                let position = self.node_position(center, offset, coord);
                let color = if coord == Coord::new(0, 0) {
                    ORIGIN_COLOR
                } else {
                    NODE_COLOR
                };
                frame.fill(&Path::circle(position, radius), color);

                frame.fill_text(Text {
                    content: coord.note_name(self.origin.root).to_string(),
                    position,
                    color: LABEL_COLOR,
                    size: (radius * 0.8).into(),
                    horizontal_alignment: iced::alignment::Horizontal::Center,
                    vertical_alignment: iced::alignment::Vertical::Center,
                    ..Text::default()
                });

                frame.fill_text(Text {
                    content: detail_label(coord, &self.origin),
                    position: position + Vector::new(0.0, radius + 4.0),
                    color: DETAIL_COLOR,
                    size: 11.0.into(),
                    horizontal_alignment: iced::alignment::Horizontal::Center,
                    vertical_alignment: iced::alignment::Vertical::Top,
                    ..Text::default()
                });
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_ignores_origin() {
        assert_eq!(min_max([3, 5, 4].into_iter()), (3, 5));
        assert_eq!(min_max([-7, -2].into_iter()), (-7, -2));
        assert_eq!(min_max(std::iter::empty()), (0, 0));
    }

    #[test]
    fn test_shifted_lattice_is_centred() {
        let coords = [Coord::new(10, 2), Coord::new(12, 2), Coord::new(11, 4)];
        let cache = Cache::new();
        let canvas = LatticeCanvas::new(&coords, Origin::default(), 10.0, &cache);
        assert_eq!(canvas.centring_offset(), Vector::new(-110.0, 30.0));
    }

    #[test]
    fn test_far_nodes_are_labelled_in_cents() {
        let origin = Origin::default();
        assert!(detail_label(Coord::new(1, 0), &origin).starts_with("3/2  392.4 Hz"));
        let far = detail_label(Coord::new(41, 0), &origin);
        assert!(far.contains("c  "), "{far}");
        assert!(far.ends_with(" Hz"));
    }
}

//! Analog clock face compositor
//!
//! Turns a style, a viewport and a time sample into the ordered primitive list
//! for one frame: background disc, ring, tick dots, hour labels, then the
//! hour, minute and second hands. Every length is a fraction of the dial
//! radius so the face scales with the widget.

use clockface_types::{ClockStyle, Color, DrawPrimitive, PaintStyle, TimeSample};

use crate::constants::{HOUR_LABEL_COUNT, HOUR_STEP, MINUTE_STEP, START_ANGLE, TICK_COUNT};
use crate::metrics::TextMeasurer;
use crate::viewport::ViewportState;

/// Primitives in one frame: disc, ring, dots, labels, 4 hand segments
pub const PRIMITIVES_PER_FRAME: usize = 2 + TICK_COUNT as usize + HOUR_LABEL_COUNT as usize + 4;

/// A straight hand segment along the hand's angle, in fractions of the radius.
///
/// The segment starts `tail` behind the center (opposite the pointing
/// direction) and ends at `reach` along it; a negative `reach` keeps the whole
/// segment behind the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSegment {
    pub stroke: f64,
    pub tail: f64,
    pub reach: f64,
}

pub const HOUR_HAND: HandSegment = HandSegment {
    stroke: 1.0 / 15.0,
    tail: 3.0 / 14.0,
    reach: 7.0 / 14.0,
};

pub const MINUTE_HAND: HandSegment = HandSegment {
    stroke: 1.0 / 40.0,
    tail: 2.0 / 7.0,
    reach: 5.0 / 7.0,
};

pub const SECOND_HAND_TAIL: HandSegment = HandSegment {
    stroke: 1.0 / 80.0,
    tail: 1.0 / 14.0,
    reach: 5.0 / 7.0,
};

/// Broad counterweight of the second hand
pub const SECOND_HAND_BASE: HandSegment = HandSegment {
    stroke: 1.0 / 50.0,
    tail: 2.0 / 7.0,
    reach: -1.0 / 14.0,
};

pub fn hour_hand_angle(time: &TimeSample) -> f64 {
    time.hour_with_minutes() * HOUR_STEP + START_ANGLE
}

pub fn minute_hand_angle(time: &TimeSample) -> f64 {
    time.minute as f64 * MINUTE_STEP + START_ANGLE
}

pub fn second_hand_angle(time: &TimeSample) -> f64 {
    time.second as f64 * MINUTE_STEP + START_ANGLE
}

/// Angle of the hour label `hour` (1..=12)
pub fn hour_label_angle(hour: u32) -> f64 {
    START_ANGLE + hour as f64 * HOUR_STEP
}

/// Angle of tick dot `index` (0..60); dot 0 sits at 3 o'clock
pub fn tick_angle(index: u32) -> f64 {
    index as f64 * MINUTE_STEP
}

/// Dot radius for tick `index`; hour positions are larger
pub fn tick_radius(index: u32, radius: f64) -> f64 {
    if index % 5 == 0 {
        radius / 96.0
    } else {
        radius / 128.0
    }
}

/// Compose one frame of the clock face
pub fn compose(
    style: &ClockStyle,
    viewport: &ViewportState,
    time: &TimeSample,
    measurer: &dyn TextMeasurer,
) -> Vec<DrawPrimitive> {
    let mut frame = Vec::with_capacity(PRIMITIVES_PER_FRAME);

    draw_clock_base(&mut frame, style, viewport);
    draw_clock_frame(&mut frame, style, viewport);
    draw_dots(&mut frame, style, viewport);
    draw_hour_labels(&mut frame, style, viewport, measurer);
    draw_clock_hands(&mut frame, style, viewport, time);

    frame
}

fn draw_clock_base(frame: &mut Vec<DrawPrimitive>, style: &ClockStyle, viewport: &ViewportState) {
    frame.push(DrawPrimitive::Circle {
        center: viewport.center(),
        radius: viewport.radius(),
        color: style.background,
        paint: PaintStyle::Fill,
        stroke_width: 0.0,
    });
}

fn draw_clock_frame(frame: &mut Vec<DrawPrimitive>, style: &ClockStyle, viewport: &ViewportState) {
    let stroke_width = viewport.radius() / 12.0;
    // Inset by half the stroke so the ring's outer edge touches the bounds
    frame.push(DrawPrimitive::Circle {
        center: viewport.center(),
        radius: viewport.radius() - stroke_width / 2.0,
        color: style.ring,
        paint: PaintStyle::Stroke,
        stroke_width,
    });
}

fn draw_dots(frame: &mut Vec<DrawPrimitive>, style: &ClockStyle, viewport: &ViewportState) {
    let radius = viewport.radius();
    let dots_radius = radius * 5.0 / 6.0;

    for i in 0..TICK_COUNT {
        frame.push(DrawPrimitive::Circle {
            center: viewport.project(tick_angle(i), dots_radius),
            radius: tick_radius(i, radius),
            color: style.dots,
            paint: PaintStyle::Fill,
            stroke_width: 0.0,
        });
    }
}

fn draw_hour_labels(
    frame: &mut Vec<DrawPrimitive>,
    style: &ClockStyle,
    viewport: &ViewportState,
    measurer: &dyn TextMeasurer,
) {
    let size = viewport.radius() * 2.0 / 7.0;
    let labels_radius = viewport.radius() * 11.0 / 16.0;
    let baseline_shift = measurer.font_metrics(size).center_to_baseline();

    for hour in 1..=HOUR_LABEL_COUNT {
        let mut position = viewport.project(hour_label_angle(hour), labels_radius);
        position.y += baseline_shift;
        frame.push(DrawPrimitive::Text {
            position,
            text: hour.to_string(),
            color: style.text,
            size,
        });
    }
}

fn draw_clock_hands(
    frame: &mut Vec<DrawPrimitive>,
    style: &ClockStyle,
    viewport: &ViewportState,
    time: &TimeSample,
) {
    let second_angle = second_hand_angle(time);

    frame.push(hand_line(viewport, hour_hand_angle(time), HOUR_HAND, style.hour_hand));
    frame.push(hand_line(viewport, minute_hand_angle(time), MINUTE_HAND, style.minute_hand));
    frame.push(hand_line(viewport, second_angle, SECOND_HAND_TAIL, style.second_hand));
    frame.push(hand_line(viewport, second_angle, SECOND_HAND_BASE, style.second_hand));
}

fn hand_line(viewport: &ViewportState, angle: f64, segment: HandSegment, color: Color) -> DrawPrimitive {
    let radius = viewport.radius();
    DrawPrimitive::Line {
        from: viewport.project(angle, -radius * segment.tail),
        to: viewport.project(angle, radius * segment.reach),
        color,
        stroke_width: radius * segment.stroke,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ApproximateMetrics, FontMetrics};
    use clockface_types::Point;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    struct FixedMetrics(FontMetrics);

    impl TextMeasurer for FixedMetrics {
        fn font_metrics(&self, _size: f64) -> FontMetrics {
            self.0
        }
    }

    fn frame_at(width: i32, height: i32, time: TimeSample) -> Vec<DrawPrimitive> {
        compose(
            &ClockStyle::default(),
            &ViewportState::new(width, height),
            &time,
            &ApproximateMetrics::default(),
        )
    }

    fn line_angle(primitive: &DrawPrimitive) -> f64 {
        match primitive {
            DrawPrimitive::Line { from, to, .. } => (to.y - from.y).atan2(to.x - from.x),
            other => panic!("expected line, got {}", other.kind()),
        }
    }

    fn angles_match(a: f64, b: f64) -> bool {
        let diff = (a - b).rem_euclid(2.0 * PI);
        diff < EPS || (2.0 * PI - diff) < EPS
    }

    #[test]
    fn test_layer_order() {
        let frame = frame_at(240, 240, TimeSample::new(10, 10, 30));
        assert_eq!(frame.len(), PRIMITIVES_PER_FRAME);

        assert!(matches!(frame[0], DrawPrimitive::Circle { paint: PaintStyle::Fill, .. }));
        assert!(matches!(frame[1], DrawPrimitive::Circle { paint: PaintStyle::Stroke, .. }));
        assert!(frame[2..62].iter().all(|p| p.kind() == "circle"));
        assert!(frame[62..74].iter().all(|p| p.kind() == "text"));
        assert!(frame[74..78].iter().all(|p| p.kind() == "line"));
    }

    #[test]
    fn test_layer_colors() {
        let style = ClockStyle::new(
            Color(1),
            Color(2),
            Color(3),
            Color(4),
            Color(5),
            Color(6),
            Color(7),
        );
        let frame = compose(
            &style,
            &ViewportState::new(100, 100),
            &TimeSample::default(),
            &ApproximateMetrics::default(),
        );
        assert_eq!(frame[0].color(), Color(7));
        assert_eq!(frame[1].color(), Color(1));
        assert_eq!(frame[2].color(), Color(5));
        assert_eq!(frame[62].color(), Color(6));
        assert_eq!(frame[74].color(), Color(2));
        assert_eq!(frame[75].color(), Color(3));
        assert_eq!(frame[76].color(), Color(4));
        assert_eq!(frame[77].color(), Color(4));
    }

    #[test]
    fn test_ring_geometry() {
        let frame = frame_at(240, 120, TimeSample::default());
        match &frame[1] {
            DrawPrimitive::Circle {
                center,
                radius,
                stroke_width,
                ..
            } => {
                assert_eq!(*center, Point::new(120.0, 60.0));
                assert!((stroke_width - 5.0).abs() < EPS);
                assert!((radius - 57.5).abs() < EPS);
            }
            other => panic!("expected circle, got {}", other.kind()),
        }
    }

    #[test]
    fn test_hour_dots_are_larger() {
        let frame = frame_at(192, 192, TimeSample::default());
        let radius = 96.0;
        for (i, primitive) in frame[2..62].iter().enumerate() {
            let DrawPrimitive::Circle { radius: dot, center, .. } = primitive else {
                panic!("expected circle");
            };
            if i % 5 == 0 {
                assert!((dot - radius / 96.0).abs() < EPS);
            } else {
                assert!((dot - radius / 128.0).abs() < EPS);
            }
            let distance = Point::new(96.0, 96.0).distance_to(*center);
            assert!((distance - radius * 5.0 / 6.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_first_dot_points_right() {
        let frame = frame_at(120, 120, TimeSample::default());
        let DrawPrimitive::Circle { center, .. } = &frame[2] else {
            panic!("expected circle");
        };
        assert!((center.x - (60.0 + 50.0)).abs() < EPS);
        assert!((center.y - 60.0).abs() < EPS);
    }

    #[test]
    fn test_labels_thirty_degrees_apart() {
        let metrics = FontMetrics::new(12.0, 4.0);
        let viewport = ViewportState::new(320, 320);
        let frame = compose(
            &ClockStyle::default(),
            &viewport,
            &TimeSample::default(),
            &FixedMetrics(metrics),
        );

        let center = viewport.center();
        let mut previous: Option<f64> = None;
        for (i, primitive) in frame[62..74].iter().enumerate() {
            let DrawPrimitive::Text { position, text, size, .. } = primitive else {
                panic!("expected text");
            };
            let hour = i as u32 + 1;
            assert_eq!(text, &hour.to_string());
            assert!((size - 160.0 * 2.0 / 7.0).abs() < EPS);

            let anchor_y = position.y - metrics.center_to_baseline();
            let angle = (anchor_y - center.y).atan2(position.x - center.x);
            assert!(angles_match(angle, hour_label_angle(hour)));
            let distance = center.distance_to(Point::new(position.x, anchor_y));
            assert!((distance - 110.0).abs() < 1e-6);

            if let Some(prev) = previous {
                assert!(angles_match(angle - prev, PI / 6.0));
            }
            previous = Some(angle);
        }

        // "12" sits straight above the center
        let DrawPrimitive::Text { position, text, .. } = &frame[73] else {
            panic!("expected text");
        };
        assert_eq!(text, "12");
        assert!((position.x - center.x).abs() < 1e-6);
        assert!(position.y < center.y);
    }

    #[test]
    fn test_midnight_hands_point_up() {
        let frame = frame_at(200, 200, TimeSample::new(0, 0, 0));
        for primitive in &frame[74..77] {
            assert!(angles_match(line_angle(primitive), -PI / 2.0));
        }
        // The counterweight runs toward the center from below it
        let DrawPrimitive::Line { from, to, .. } = &frame[77] else {
            panic!("expected line");
        };
        assert!(from.y > to.y && to.y > 100.0);
    }

    #[test]
    fn test_minute_and_second_hand_angles() {
        let frame = frame_at(200, 200, TimeSample::new(0, 15, 30));
        let r = 100.0;

        // Quarter past: minute hand points right; half a minute: second hand down
        assert!(angles_match(line_angle(&frame[75]), 0.0));
        assert!(angles_match(line_angle(&frame[76]), PI / 2.0));

        // Counterweight sits entirely above the center, opposite the hand
        let DrawPrimitive::Line { from, to, .. } = &frame[77] else {
            panic!("expected line");
        };
        assert!((from.x - 100.0).abs() < 1e-6);
        assert!((from.y - (100.0 - r * 2.0 / 7.0)).abs() < 1e-6);
        assert!((to.x - 100.0).abs() < 1e-6);
        assert!((to.y - (100.0 - r / 14.0)).abs() < 1e-6);

        // Minute at 40 lands where the dial's 8 o'clock label is
        let frame = frame_at(200, 200, TimeSample::new(0, 40, 10));
        assert!(angles_match(line_angle(&frame[75]), hour_label_angle(8)));
        assert!(angles_match(line_angle(&frame[76]), hour_label_angle(2)));
    }

    #[test]
    fn test_hand_extents() {
        let frame = frame_at(280, 280, TimeSample::new(3, 0, 0));
        let r = 140.0;
        let DrawPrimitive::Line { from, to, stroke_width, .. } = &frame[74] else {
            panic!("expected line");
        };
        // Hour hand at 3 o'clock points right
        assert!((to.x - (140.0 + r * 7.0 / 14.0)).abs() < 1e-6);
        assert!((from.x - (140.0 - r * 3.0 / 14.0)).abs() < 1e-6);
        assert!((to.y - 140.0).abs() < 1e-6);
        assert!((stroke_width - r / 15.0).abs() < EPS);

        let widths: Vec<f64> = frame[75..78]
            .iter()
            .map(|p| match p {
                DrawPrimitive::Line { stroke_width, .. } => *stroke_width,
                _ => 0.0,
            })
            .collect();
        assert!((widths[0] - r / 40.0).abs() < EPS);
        assert!((widths[1] - r / 80.0).abs() < EPS);
        assert!((widths[2] - r / 50.0).abs() < EPS);
    }

    #[test]
    fn test_afternoon_matches_morning() {
        let morning = frame_at(150, 150, TimeSample::new(1, 20, 5));
        let afternoon = frame_at(150, 150, TimeSample::new(13, 20, 5));
        assert_eq!(morning, afternoon);
    }

    #[test]
    fn test_hour_hand_moves_with_minutes() {
        let mut previous = hour_hand_angle(&TimeSample::new(4, 0, 0));
        for minute in 1..60 {
            let angle = hour_hand_angle(&TimeSample::new(4, minute, 0));
            assert!(angle > previous);
            assert!(angle - previous < HOUR_STEP / 59.0);
            previous = angle;
        }
        // Continuous into the next hour
        let next = hour_hand_angle(&TimeSample::new(5, 0, 0));
        assert!((next - previous - HOUR_STEP / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_past_hour_hand_angle() {
        let angle = hour_hand_angle(&TimeSample::new(6, 30, 0));
        assert!((angle - (6.5 * PI / 6.0 - PI / 2.0)).abs() < EPS);
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        let frame = frame_at(0, 300, TimeSample::new(9, 45, 15));
        assert_eq!(frame.len(), PRIMITIVES_PER_FRAME);
        for primitive in &frame {
            match primitive {
                DrawPrimitive::Circle { radius, stroke_width, .. } => {
                    assert_eq!(*radius, 0.0);
                    assert_eq!(*stroke_width, 0.0);
                }
                DrawPrimitive::Line { from, to, stroke_width, .. } => {
                    assert_eq!(*stroke_width, 0.0);
                    assert!(from.distance_to(*to) < EPS);
                }
                DrawPrimitive::Text { size, .. } => assert_eq!(*size, 0.0),
            }
        }
    }
}

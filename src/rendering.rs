use std::f64::consts::TAU;

use ggez::{
    Context, GameResult,
    glam::Vec2,
    graphics::{self, Color, DrawMode, MeshBuilder, PxScale, Text},
};

use fortune_wheel_engine::POINTER_ANGLE;

use crate::cues::CueState;
use crate::state::WheelState;

const HUB_RADIUS: f32 = 40.0;
const RIM_DOTS: usize = 24;
const ARC_STEPS_PER_SEGMENT: usize = 24;

// Segment palette carried over from the original wheel.
const PALETTE: [Color; 12] = [
    Color::new(1.0, 0.42, 0.42, 1.0),  // #FF6B6B
    Color::new(0.31, 0.8, 0.77, 1.0),  // #4ECDC4
    Color::new(0.27, 0.72, 0.82, 1.0), // #45B7D1
    Color::new(0.59, 0.81, 0.71, 1.0), // #96CEB4
    Color::new(1.0, 0.92, 0.65, 1.0),  // #FFEAA7
    Color::new(0.87, 0.63, 0.87, 1.0), // #DDA0DD
    Color::new(0.6, 0.85, 0.78, 1.0),  // #98D8C8
    Color::new(0.97, 0.86, 0.44, 1.0), // #F7DC6F
    Color::new(0.73, 0.56, 0.81, 1.0), // #BB8FCE
    Color::new(0.52, 0.76, 0.91, 1.0), // #85C1E9
    Color::new(0.97, 0.71, 0.0, 1.0),  // #F8B500
    Color::new(0.0, 0.81, 0.82, 1.0),  // #00CED1
];

const GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);
const ACCENT_RED: Color = Color::new(1.0, 0.0, 0.25, 1.0);

fn dir(angle: f64) -> Vec2 {
    Vec2::new(angle.cos() as f32, angle.sin() as f32)
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(
        &self,
        ctx: &mut Context,
        state: &WheelState,
        rotation: f64,
        cues: &CueState,
    ) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::from_rgb(20, 20, 30));
        let mut mb = MeshBuilder::new();

        let (width, height) = ctx.gfx.drawable_size();
        let center = Vec2::new(width / 2.0, height / 2.0);
        let radius = (width.min(height) / 2.0 - 60.0).max(HUB_RADIUS + 20.0);

        let count = state.config.segment_count();
        let segment_angle = state.config.segment_angle();

        // Segment wedges with white dividers
        for i in 0..count {
            let start = rotation + i as f64 * segment_angle;
            let mut points = Vec::with_capacity(ARC_STEPS_PER_SEGMENT + 2);
            points.push(center);
            for step in 0..=ARC_STEPS_PER_SEGMENT {
                let a = start + segment_angle * step as f64 / ARC_STEPS_PER_SEGMENT as f64;
                points.push(center + dir(a) * radius);
            }

            mb.polygon(DrawMode::fill(), &points, PALETTE[i % PALETTE.len()])?;
            mb.polygon(DrawMode::stroke(3.0), &points, Color::WHITE)?;
        }

        // Hub, outer ring, alternating rim dots
        mb.circle(DrawMode::fill(), center, HUB_RADIUS, 0.5, Color::WHITE)?;
        mb.circle(DrawMode::stroke(5.0), center, HUB_RADIUS, 0.5, GOLD)?;
        mb.circle(DrawMode::stroke(8.0), center, radius, 0.5, GOLD)?;
        for i in 0..RIM_DOTS {
            let a = rotation + i as f64 * TAU / RIM_DOTS as f64;
            let color = if i % 2 == 0 { ACCENT_RED } else { GOLD };
            mb.circle(
                DrawMode::fill(),
                center + dir(a) * (radius + 2.0),
                6.0,
                0.5,
                color,
            )?;
        }

        // Fixed pointer at the top, same angle constant the resolver uses.
        // Flashes briefly on segment crossings.
        let pointer_dir = dir(POINTER_ANGLE);
        let perp = Vec2::new(-pointer_dir.y, pointer_dir.x);
        let tip = center + pointer_dir * (radius - 24.0);
        let base = center + pointer_dir * (radius + 14.0);
        let pointer_color = if cues.pointer_flash() { Color::WHITE } else { ACCENT_RED };
        mb.polygon(
            DrawMode::fill(),
            &[tip, base + perp * 14.0, base - perp * 14.0],
            pointer_color,
        )?;

        let mesh = graphics::Mesh::from_data(&ctx.gfx, mb.build());
        canvas.draw(&mesh, graphics::DrawParam::default());

        // Segment labels, rotated outward along the segment midline
        for i in 0..count {
            let mid = rotation + (i as f64 + 0.5) * segment_angle;
            let pos = center + dir(mid) * (radius - 30.0);
            let label = state.config.label(i).unwrap_or_default();
            let text = Text::new(label);
            canvas.draw(
                &text,
                graphics::DrawParam::default()
                    .dest(pos)
                    .rotation(mid as f32)
                    .offset(Vec2::new(1.0, 0.5))
                    .color(Color::WHITE),
            );
        }

        // Result banner, pulsing while the fanfare cue is live
        if let Some(result) = &state.result {
            let mut text = Text::new(format!("* {result} *"));
            text.set_scale(PxScale::from(36.0));
            let scale = 1.0 + 0.3 * cues.fanfare_strength();
            canvas.draw(
                &text,
                graphics::DrawParam::default()
                    .dest(Vec2::new(center.x, height - 40.0))
                    .offset(Vec2::new(0.5, 0.5))
                    .scale(Vec2::splat(scale))
                    .color(GOLD),
            );
        }

        if let Some(message) = state.message() {
            canvas.draw(
                &Text::new(message),
                graphics::DrawParam::default().dest(Vec2::new(20.0, 20.0)),
            );
        }

        canvas.draw(
            &Text::new("Space: spin | 1-3: presets"),
            graphics::DrawParam::default()
                .dest(Vec2::new(20.0, height - 30.0))
                .color(Color::from_rgb(150, 150, 170)),
        );

        canvas.finish(ctx)
    }
}

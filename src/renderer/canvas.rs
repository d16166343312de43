//! Canvas 2D renderer
//!
//! Neon-on-black look: faint background grid, glowing obstacles, a gradient
//! player orb with a fading trail, and text overlays for the title and
//! game-over screens.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::GamePhase;
use crate::snapshot::Snapshot;

const BACKGROUND: &str = "#050510";
const GRID_COLOR: &str = "rgba(80,80,180,0.08)";
const GRID_SPACING: f64 = 40.0;
const PLAYER_GLOW: &str = "#a0e8ff";
const PLAYER_EDGE: &str = "#4040ff";
const BEST_COLOR: &str = "#ff9ef5";
const DEATH_COLOR: &str = "#ff6af0";
const FONT: &str = "'Courier New', monospace";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw one full frame
    pub fn render(&self, snap: &Snapshot) -> Result<(), JsValue> {
        let w = snap.arena_width as f64;
        let h = snap.arena_height as f64;

        self.draw_background(w, h);
        self.draw_particles(snap)?;
        self.draw_trail(snap)?;
        self.draw_obstacles(snap)?;
        self.draw_player(snap)?;
        self.draw_hud(snap, w)?;

        match snap.phase {
            GamePhase::Idle => self.draw_title(w, h)?,
            GamePhase::Dead => self.draw_game_over(snap, w, h)?,
            GamePhase::Playing => {}
        }
        Ok(())
    }

    fn circle(&self, x: f64, y: f64, r: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(x, y, r.max(0.0), 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn draw_background(&self, w: f64, h: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);
        let mut x = 0.0;
        while x < w {
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, h);
            ctx.stroke();
            x += GRID_SPACING;
        }
        let mut y = 0.0;
        while y < h {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(w, y);
            ctx.stroke();
            y += GRID_SPACING;
        }
    }

    fn draw_particles(&self, snap: &Snapshot) -> Result<(), JsValue> {
        for p in &snap.particles {
            self.ctx.set_global_alpha(p.alpha as f64);
            self.ctx.set_fill_style_str(&p.color.css());
            self.circle(p.x as f64, p.y as f64, p.radius as f64)?;
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_trail(&self, snap: &Snapshot) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(PLAYER_GLOW);
        for t in &snap.player.trail {
            self.ctx.set_global_alpha(t.alpha as f64);
            self.circle(t.x as f64, t.y as f64, t.radius as f64)?;
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_obstacles(&self, snap: &Snapshot) -> Result<(), JsValue> {
        self.ctx.set_shadow_blur(18.0);
        for o in &snap.obstacles {
            let color = o.color.css();
            self.ctx.set_shadow_color(&color);
            self.ctx.set_fill_style_str(&color);
            self.circle(o.x as f64, o.y as f64, o.radius as f64)?;
        }
        self.ctx.set_shadow_blur(0.0);
        Ok(())
    }

    fn draw_player(&self, snap: &Snapshot) -> Result<(), JsValue> {
        let p = &snap.player;
        let (x, y, r) = (p.x as f64, p.y as f64, p.radius as f64);

        let grad = self.ctx.create_radial_gradient(x - 5.0, y - 5.0, 2.0, x, y, r)?;
        grad.add_color_stop(0.0, "#ffffff")?;
        grad.add_color_stop(0.4, PLAYER_GLOW)?;
        grad.add_color_stop(1.0, PLAYER_EDGE)?;

        self.ctx.set_shadow_blur(28.0);
        self.ctx.set_shadow_color(PLAYER_GLOW);
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.circle(x, y, r)?;
        self.ctx.set_shadow_blur(0.0);
        Ok(())
    }

    fn draw_hud(&self, snap: &Snapshot, w: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_font(&format!("bold 22px {FONT}"));
        ctx.set_text_align("left");
        ctx.set_fill_style_str(PLAYER_GLOW);
        ctx.fill_text(&format!("SCORE  {}", snap.score_display()), 18.0, 34.0)?;
        ctx.set_text_align("right");
        ctx.set_fill_style_str(BEST_COLOR);
        ctx.fill_text(&format!("BEST  {}", snap.high_score_display()), w - 18.0, 34.0)?;
        Ok(())
    }

    fn draw_title(&self, w: f64, h: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("rgba(5,5,20,0.75)");
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_text_align("center");
        ctx.set_font(&format!("bold 52px {FONT}"));
        ctx.set_fill_style_str(PLAYER_GLOW);
        ctx.set_shadow_blur(30.0);
        ctx.set_shadow_color(PLAYER_GLOW);
        ctx.fill_text("CIRCLE RUNNER", w / 2.0, h / 2.0 - 40.0)?;
        ctx.set_shadow_blur(0.0);

        ctx.set_font(&format!("20px {FONT}"));
        ctx.set_fill_style_str("#ffffff99");
        ctx.fill_text(
            "WASD / ARROWS TO MOVE  ·  SPACE TO START",
            w / 2.0,
            h / 2.0 + 20.0,
        )?;
        Ok(())
    }

    fn draw_game_over(&self, snap: &Snapshot, w: f64, h: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("rgba(5,5,20,0.8)");
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_text_align("center");
        ctx.set_font(&format!("bold 46px {FONT}"));
        ctx.set_fill_style_str(DEATH_COLOR);
        ctx.set_shadow_blur(30.0);
        ctx.set_shadow_color(DEATH_COLOR);
        ctx.fill_text("GAME OVER", w / 2.0, h / 2.0 - 50.0)?;
        ctx.set_shadow_blur(0.0);

        ctx.set_font(&format!("24px {FONT}"));
        ctx.set_fill_style_str(PLAYER_GLOW);
        ctx.fill_text(
            &format!("SCORE  {}", snap.score_display()),
            w / 2.0,
            h / 2.0 + 5.0,
        )?;
        ctx.set_fill_style_str(BEST_COLOR);
        ctx.fill_text(
            &format!("BEST  {}", snap.high_score_display()),
            w / 2.0,
            h / 2.0 + 38.0,
        )?;

        ctx.set_font(&format!("18px {FONT}"));
        ctx.set_fill_style_str("#ffffff77");
        ctx.fill_text("PRESS SPACE TO PLAY AGAIN", w / 2.0, h / 2.0 + 80.0)?;
        Ok(())
    }
}

// main.rs
mod hud;
mod input;

use anyhow::{Context, Result};
use raylib::core::texture::RaylibTexture2D; // trait of .update_texture()
use raylib::prelude::*;

use hospital_raycaster::core::config::GameConfig;
use hospital_raycaster::core::frame_loop::{FrameHost, FrameLoop, SystemClock};
use hospital_raycaster::core::simulation::{FrameOutput, GameStatus, Simulation, Snapshot};
use hospital_raycaster::render::framebuffer::Framebuffer;

use input::InputController;

const CONFIG_PATH: &str = "hospital.json";
const LABEL_FONT: i32 = 14;

struct RaylibHost {
    rl: RaylibHandle,
    thread: RaylibThread,
    texture: Option<Texture2D>,
    tex_size: (u32, u32),
    input: InputController,
    cfg: GameConfig,
}

impl RaylibHost {
    fn new(cfg: GameConfig) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(cfg.window_width as i32, cfg.window_height as i32)
            .title(&cfg.title)
            .resizable()
            .build();
        rl.set_target_fps(cfg.target_fps);
        // Capturar/ocultar cursor para mouse look
        rl.disable_cursor();
        let input = InputController::new(cfg.mouse_sensitivity, cfg.turn_speed);
        Self { rl, thread, texture: None, tex_size: (0, 0), input, cfg }
    }

    /// Streaming texture matching the framebuffer, recreated on resize.
    fn ensure_texture(&mut self, w: u32, h: u32) -> Result<()> {
        if self.texture.is_some() && self.tex_size == (w, h) {
            return Ok(());
        }
        let img = Image::gen_image_color(w as i32, h as i32, Color::BLACK);
        let tex = self
            .rl
            .load_texture_from_image(&self.thread, &img)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("creating {w}x{h} frame texture"))?;
        self.texture = Some(tex);
        self.tex_size = (w, h);
        Ok(())
    }
}

impl FrameHost for RaylibHost {
    fn surface_size(&self) -> Option<(u32, u32)> {
        let w = self.rl.get_screen_width();
        let h = self.rl.get_screen_height();
        if w <= 0 || h <= 0 {
            return None;
        }
        Some((w as u32, h as u32))
    }

    fn poll_input(&mut self, sim: &mut Simulation) {
        if self.rl.is_key_pressed(KeyboardKey::KEY_R) && sim.snapshot().status() != GameStatus::Playing {
            log::info!("restarting");
            *sim = Simulation::new(&self.cfg);
            self.input.reset(sim);
        }
        self.input.apply(&self.rl, sim);
    }

    fn present(&mut self, frame: &Framebuffer, output: &FrameOutput, snapshot: &Snapshot) {
        if let Err(e) = self.ensure_texture(frame.width, frame.height) {
            log::error!("{e:#}");
            return;
        }

        let locale = self.cfg.locale;
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);

        if let Some(tex) = self.texture.as_mut() {
            if let Err(e) = tex.update_texture(frame.as_rgba_bytes()) {
                log::warn!("frame upload failed ({}x{}): {e}", frame.width, frame.height);
            }
            d.draw_texture(&*tex, 0, 0, Color::WHITE);
        }

        for label in &output.labels {
            let alpha = (label.alpha.clamp(0.0, 1.0) * 255.0) as u8;
            hud::centered(
                &mut d,
                label.text,
                label.x as i32,
                label.y as i32 - LABEL_FONT,
                LABEL_FONT,
                Color::new(255, 255, 255, alpha),
            );
        }

        hud::draw(&mut d, snapshot, locale);
    }

    fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = GameConfig::load_or_default(CONFIG_PATH)?;
    let sim = Simulation::new(&cfg);
    let max_delta = cfg.max_frame_delta;
    let mut host = RaylibHost::new(cfg);

    let mut frame_loop = FrameLoop::new(sim, SystemClock::new(), max_delta);
    let exit = frame_loop.run(&mut host);
    log::info!("exit: {exit:?}");
    Ok(())
}
